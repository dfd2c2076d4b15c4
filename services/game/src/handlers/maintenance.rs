use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use deckhand_auth_types::identity::IdentityHeaders;
use deckhand_domain::permission::is_admin;

use crate::error::GameServiceError;
use crate::state::AppState;
use crate::usecase::maintenance::{FixVariantsInput, FixVariantsUseCase};

#[derive(Debug, Deserialize)]
pub struct FixVariantsRequest {
    pub from: Option<String>,
    pub to: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FixVariantsResponse {
    pub updated: u64,
}

/// Admin-only maintenance sweep over all users. Runs without per-user
/// locks; the rebuild is idempotent and admin-triggered.
pub async fn fix_variants(
    State(state): State<AppState>,
    identity: IdentityHeaders,
    Json(req): Json<FixVariantsRequest>,
) -> Result<Json<FixVariantsResponse>, GameServiceError> {
    if !is_admin(identity.user_role) {
        return Err(GameServiceError::Forbidden);
    }

    let updated = FixVariantsUseCase {
        users: state.user_repo(),
        catalog: state.catalog_repo(),
        activity: state.activity_log(),
    }
    .execute(
        &identity.username,
        FixVariantsInput {
            from: req.from,
            to: req.to,
        },
    )
    .await?;
    Ok(Json(FixVariantsResponse { updated }))
}

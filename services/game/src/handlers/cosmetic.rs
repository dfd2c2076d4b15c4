use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use serde_json::Value;

use deckhand_auth_types::identity::IdentityHeaders;

use crate::error::GameServiceError;
use crate::handlers::{empty_object, required_id};
use crate::state::AppState;
use crate::usecase::cosmetic::{BuyCosmeticUseCase, CosmeticKind};

#[derive(Debug, Deserialize)]
pub struct BuyAvatarRequest {
    pub avatar: String,
}

pub async fn buy_avatar(
    State(state): State<AppState>,
    identity: IdentityHeaders,
    Json(req): Json<BuyAvatarRequest>,
) -> Result<Json<Value>, GameServiceError> {
    required_id(&req.avatar)?;
    buy_cosmetic(&state, &identity, CosmeticKind::Avatar, &req.avatar).await
}

#[derive(Debug, Deserialize)]
pub struct BuyCardbackRequest {
    pub cardback: String,
}

pub async fn buy_cardback(
    State(state): State<AppState>,
    identity: IdentityHeaders,
    Json(req): Json<BuyCardbackRequest>,
) -> Result<Json<Value>, GameServiceError> {
    required_id(&req.cardback)?;
    buy_cosmetic(&state, &identity, CosmeticKind::Cardback, &req.cardback).await
}

async fn buy_cosmetic(
    state: &AppState,
    identity: &IdentityHeaders,
    kind: CosmeticKind,
    tid: &str,
) -> Result<Json<Value>, GameServiceError> {
    let _guard = state.locks.acquire(identity.user_id).await;
    BuyCosmeticUseCase {
        users: state.user_repo(),
        activity: state.activity_log(),
        rules: state.rules,
    }
    .execute(identity.user_id, kind, tid)
    .await?;
    Ok(empty_object())
}

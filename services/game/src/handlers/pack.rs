use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use deckhand_auth_types::identity::IdentityHeaders;

use crate::error::GameServiceError;
use crate::handlers::{empty_object, required_id, validated_quantity};
use crate::state::AppState;
use crate::usecase::pack::{
    BuyPackInput, BuyPackUseCase, OpenPackUseCase, SellPackInput, SellPackUseCase,
};

#[derive(Debug, Deserialize)]
pub struct TradePackRequest {
    pub pack: String,
    pub quantity: Option<i64>,
}

pub async fn buy_pack(
    State(state): State<AppState>,
    identity: IdentityHeaders,
    Json(req): Json<TradePackRequest>,
) -> Result<Json<Value>, GameServiceError> {
    required_id(&req.pack)?;
    let quantity = validated_quantity(req.quantity)?;

    let _guard = state.locks.acquire(identity.user_id).await;
    BuyPackUseCase {
        users: state.user_repo(),
        catalog: state.catalog_repo(),
        activity: state.activity_log(),
    }
    .execute(
        identity.user_id,
        BuyPackInput {
            pack: req.pack,
            quantity,
        },
    )
    .await?;
    Ok(empty_object())
}

pub async fn sell_pack(
    State(state): State<AppState>,
    identity: IdentityHeaders,
    Json(req): Json<TradePackRequest>,
) -> Result<Json<Value>, GameServiceError> {
    required_id(&req.pack)?;
    let quantity = validated_quantity(req.quantity)?;

    let _guard = state.locks.acquire(identity.user_id).await;
    SellPackUseCase {
        users: state.user_repo(),
        catalog: state.catalog_repo(),
        activity: state.activity_log(),
        rules: state.rules,
    }
    .execute(
        identity.user_id,
        SellPackInput {
            pack: req.pack,
            quantity,
        },
    )
    .await?;
    Ok(empty_object())
}

#[derive(Debug, Deserialize)]
pub struct OpenPackRequest {
    pub pack: String,
}

#[derive(Debug, Serialize)]
pub struct PulledCard {
    pub card: String,
    pub variant: String,
    pub quantity: i64,
}

pub async fn open_pack(
    State(state): State<AppState>,
    identity: IdentityHeaders,
    Json(req): Json<OpenPackRequest>,
) -> Result<Json<Vec<PulledCard>>, GameServiceError> {
    required_id(&req.pack)?;

    let _guard = state.locks.acquire(identity.user_id).await;
    let grants = OpenPackUseCase {
        users: state.user_repo(),
        catalog: state.catalog_repo(),
        activity: state.activity_log(),
        resolver: state.pack_resolver(),
    }
    .execute(identity.user_id, &req.pack)
    .await?;

    Ok(Json(
        grants
            .into_iter()
            .map(|g| PulledCard {
                card: g.tid,
                variant: g.variant,
                quantity: g.quantity,
            })
            .collect(),
    ))
}

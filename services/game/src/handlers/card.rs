use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use serde_json::Value;

use deckhand_auth_types::identity::IdentityHeaders;

use crate::error::GameServiceError;
use crate::handlers::{empty_object, required_id, validated_quantity};
use crate::state::AppState;
use crate::usecase::card::{
    BuyCardInput, BuyCardUseCase, SellCardInput, SellCardUseCase, SellDuplicatesInput,
    SellDuplicatesUseCase,
};

#[derive(Debug, Deserialize)]
pub struct TradeCardRequest {
    pub card: String,
    #[serde(default)]
    pub variant: String,
    pub quantity: Option<i64>,
}

pub async fn buy_card(
    State(state): State<AppState>,
    identity: IdentityHeaders,
    Json(req): Json<TradeCardRequest>,
) -> Result<Json<Value>, GameServiceError> {
    required_id(&req.card)?;
    let quantity = validated_quantity(req.quantity)?;

    let _guard = state.locks.acquire(identity.user_id).await;
    BuyCardUseCase {
        users: state.user_repo(),
        catalog: state.catalog_repo(),
        activity: state.activity_log(),
    }
    .execute(
        identity.user_id,
        BuyCardInput {
            card: req.card,
            variant: req.variant,
            quantity,
        },
    )
    .await?;
    Ok(empty_object())
}

pub async fn sell_card(
    State(state): State<AppState>,
    identity: IdentityHeaders,
    Json(req): Json<TradeCardRequest>,
) -> Result<Json<Value>, GameServiceError> {
    required_id(&req.card)?;
    let quantity = validated_quantity(req.quantity)?;

    let _guard = state.locks.acquire(identity.user_id).await;
    SellCardUseCase {
        users: state.user_repo(),
        catalog: state.catalog_repo(),
        activity: state.activity_log(),
        rules: state.rules,
    }
    .execute(
        identity.user_id,
        SellCardInput {
            card: req.card,
            variant: req.variant,
            quantity,
        },
    )
    .await?;
    Ok(empty_object())
}

#[derive(Debug, Deserialize)]
pub struct SellDuplicatesRequest {
    pub rarity: Option<String>,
    pub variant: Option<String>,
    pub keep: i64,
}

pub async fn sell_duplicates(
    State(state): State<AppState>,
    identity: IdentityHeaders,
    Json(req): Json<SellDuplicatesRequest>,
) -> Result<Json<Value>, GameServiceError> {
    if req.keep < 0 {
        return Err(GameServiceError::InvalidParameters);
    }

    let _guard = state.locks.acquire(identity.user_id).await;
    SellDuplicatesUseCase {
        users: state.user_repo(),
        catalog: state.catalog_repo(),
        activity: state.activity_log(),
        rules: state.rules,
    }
    .execute(
        identity.user_id,
        SellDuplicatesInput {
            rarity: req.rarity.filter(|r| !r.is_empty()),
            variant: req.variant.filter(|v| !v.is_empty()),
            keep: req.keep,
        },
    )
    .await?;
    Ok(empty_object())
}

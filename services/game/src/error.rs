use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Game service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum GameServiceError {
    #[error("invalid parameters")]
    InvalidParameters,
    #[error("user not found")]
    UserNotFound,
    #[error("card not found")]
    CardNotFound,
    #[error("pack not found")]
    PackNotFound,
    #[error("wallet connection not found")]
    WalletNotFound,
    #[error("cannot be bought or sold")]
    NotTradeable,
    #[error("not enough coins")]
    NotEnoughCoins,
    #[error("not enough cards")]
    NotEnoughCards,
    #[error("not enough packs")]
    NotEnoughPacks,
    #[error("already owned")]
    AlreadyOwned,
    #[error("wallet already connected")]
    WalletAlreadyConnected,
    #[error("removal request already pending")]
    RemovalAlreadyPending,
    #[error("no pending removal request")]
    NoPendingRemoval,
    #[error("forbidden")]
    Forbidden,
    /// The economy mutation persisted but the activity append failed.
    /// Callers must treat this response as ambiguous, not as a rollback.
    #[error("failed to log activity")]
    ActivityLogFailed(#[source] anyhow::Error),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl GameServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidParameters => "INVALID_PARAMETERS",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::CardNotFound => "CARD_NOT_FOUND",
            Self::PackNotFound => "PACK_NOT_FOUND",
            Self::WalletNotFound => "WALLET_NOT_FOUND",
            Self::NotTradeable => "NOT_TRADEABLE",
            Self::NotEnoughCoins => "NOT_ENOUGH_COINS",
            Self::NotEnoughCards => "NOT_ENOUGH_CARDS",
            Self::NotEnoughPacks => "NOT_ENOUGH_PACKS",
            Self::AlreadyOwned => "ALREADY_OWNED",
            Self::WalletAlreadyConnected => "WALLET_ALREADY_CONNECTED",
            Self::RemovalAlreadyPending => "REMOVAL_ALREADY_PENDING",
            Self::NoPendingRemoval => "NO_PENDING_REMOVAL",
            Self::Forbidden => "FORBIDDEN",
            Self::ActivityLogFailed(_) => "ACTIVITY_LOG_FAILED",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for GameServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::UserNotFound | Self::CardNotFound | Self::PackNotFound | Self::WalletNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::InvalidParameters
            | Self::NotTradeable
            | Self::NotEnoughCoins
            | Self::NotEnoughCards
            | Self::NotEnoughPacks
            | Self::AlreadyOwned
            | Self::RemovalAlreadyPending
            | Self::NoPendingRemoval => StatusCode::BAD_REQUEST,
            Self::WalletAlreadyConnected => StatusCode::CONFLICT,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::ActivityLogFailed(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        match &self {
            Self::Internal(e) => {
                tracing::error!(error = %e, kind = "INTERNAL", "internal error");
            }
            Self::ActivityLogFailed(e) => {
                tracing::error!(
                    error = %e,
                    kind = "ACTIVITY_LOG_FAILED",
                    "activity append failed after persisted mutation"
                );
            }
            _ => {}
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use deckhand_auth_types::identity::IdentityHeaders;
use deckhand_domain::permission::is_admin;
use deckhand_domain::wallet::RemovalStatus;

use crate::domain::types::WalletConnection;
use crate::error::GameServiceError;
use crate::handlers::required_id;
use crate::state::AppState;
use crate::usecase::wallet::{
    ConnectWalletInput, ConnectWalletUseCase, ListPendingRemovalsUseCase, ListWalletsUseCase,
    ProcessRemovalInput, ProcessRemovalUseCase, RequestRemovalInput, RequestRemovalUseCase,
};

#[derive(Debug, Serialize)]
pub struct WalletConnectionResponse {
    pub id: Uuid,
    pub address: String,
    pub chain_id: String,
    pub connected_at: DateTime<Utc>,
    pub removal_status: RemovalStatus,
}

impl From<WalletConnection> for WalletConnectionResponse {
    fn from(connection: WalletConnection) -> Self {
        Self {
            id: connection.id,
            address: connection.wallet_address,
            chain_id: connection.chain_id,
            connected_at: connection.connected_at,
            removal_status: connection.removal_status,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ConnectWalletRequest {
    pub address: String,
    #[serde(default)]
    pub chain_id: String,
}

pub async fn connect_wallet(
    State(state): State<AppState>,
    identity: IdentityHeaders,
    Json(req): Json<ConnectWalletRequest>,
) -> Result<(StatusCode, Json<WalletConnectionResponse>), GameServiceError> {
    required_id(&req.address)?;

    let connection = ConnectWalletUseCase {
        wallets: state.wallet_repo(),
    }
    .execute(
        identity.user_id,
        ConnectWalletInput {
            address: req.address,
            chain_id: req.chain_id,
        },
    )
    .await?;
    Ok((StatusCode::CREATED, Json(connection.into())))
}

pub async fn list_my_wallets(
    State(state): State<AppState>,
    identity: IdentityHeaders,
) -> Result<Json<Vec<WalletConnectionResponse>>, GameServiceError> {
    let connections = ListWalletsUseCase {
        wallets: state.wallet_repo(),
    }
    .execute(identity.user_id)
    .await?;
    Ok(Json(connections.into_iter().map(Into::into).collect()))
}

#[derive(Debug, Deserialize)]
pub struct RequestRemovalRequest {
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct RemovalStatusResponse {
    pub status: RemovalStatus,
}

pub async fn request_removal(
    State(state): State<AppState>,
    identity: IdentityHeaders,
    Path(address): Path<String>,
    Json(req): Json<RequestRemovalRequest>,
) -> Result<Json<RemovalStatusResponse>, GameServiceError> {
    required_id(&address)?;

    RequestRemovalUseCase {
        wallets: state.wallet_repo(),
    }
    .execute(
        identity.user_id,
        RequestRemovalInput {
            address,
            reason: req.reason,
            email: req.email,
        },
    )
    .await?;
    Ok(Json(RemovalStatusResponse {
        status: RemovalStatus::Pending,
    }))
}

pub async fn list_pending_removals(
    State(state): State<AppState>,
    identity: IdentityHeaders,
) -> Result<Json<Vec<WalletConnectionResponse>>, GameServiceError> {
    if !is_admin(identity.user_role) {
        return Err(GameServiceError::Forbidden);
    }

    let connections = ListPendingRemovalsUseCase {
        wallets: state.wallet_repo(),
    }
    .execute()
    .await?;
    Ok(Json(connections.into_iter().map(Into::into).collect()))
}

#[derive(Debug, Deserialize)]
pub struct ProcessRemovalRequest {
    pub address: String,
    pub status: RemovalStatus,
    #[serde(default)]
    pub notes: String,
}

pub async fn process_removal(
    State(state): State<AppState>,
    identity: IdentityHeaders,
    Json(req): Json<ProcessRemovalRequest>,
) -> Result<Json<RemovalStatusResponse>, GameServiceError> {
    if !is_admin(identity.user_role) {
        return Err(GameServiceError::Forbidden);
    }
    required_id(&req.address)?;

    let status = ProcessRemovalUseCase {
        wallets: state.wallet_repo(),
        notifier: state.notifier.clone(),
    }
    .execute(
        &identity.username,
        ProcessRemovalInput {
            address: req.address,
            status: req.status,
            notes: req.notes,
        },
    )
    .await?;
    Ok(Json(RemovalStatusResponse { status }))
}

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use deckhand_domain::wallet::RemovalStatus;

use crate::domain::repository::{Notifier, WalletRepository};
use crate::domain::types::WalletConnection;
use crate::error::GameServiceError;

// ── ConnectWallet ────────────────────────────────────────────────────────────

pub struct ConnectWalletInput {
    /// Address already signature-verified by the gateway.
    pub address: String,
    pub chain_id: String,
}

pub struct ConnectWalletUseCase<W: WalletRepository> {
    pub wallets: W,
}

impl<W: WalletRepository> ConnectWalletUseCase<W> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        input: ConnectWalletInput,
    ) -> Result<WalletConnection, GameServiceError> {
        let address = input.address.to_lowercase();
        if self.wallets.find_by_address(&address).await?.is_some() {
            return Err(GameServiceError::WalletAlreadyConnected);
        }
        let now = Utc::now();
        let connection = WalletConnection {
            id: Uuid::now_v7(),
            user_id,
            wallet_address: address,
            chain_id: input.chain_id,
            connected_at: now,
            last_used: now,
            removal_status: RemovalStatus::None,
            removal_reason: String::new(),
            removal_email: String::new(),
            admin_notes: String::new(),
            processed_by: String::new(),
            processed_at: None,
        };
        self.wallets.create(&connection).await?;
        Ok(connection)
    }
}

// ── ListMyWallets ────────────────────────────────────────────────────────────

pub struct ListWalletsUseCase<W: WalletRepository> {
    pub wallets: W,
}

impl<W: WalletRepository> ListWalletsUseCase<W> {
    pub async fn execute(&self, user_id: Uuid) -> Result<Vec<WalletConnection>, GameServiceError> {
        self.wallets.list_by_user(user_id).await
    }
}

// ── RequestWalletRemoval ─────────────────────────────────────────────────────

pub struct RequestRemovalInput {
    pub address: String,
    pub reason: String,
    pub email: String,
}

pub struct RequestRemovalUseCase<W: WalletRepository> {
    pub wallets: W,
}

impl<W: WalletRepository> RequestRemovalUseCase<W> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        input: RequestRemovalInput,
    ) -> Result<(), GameServiceError> {
        let connection = self
            .wallets
            .find_by_address(&input.address.to_lowercase())
            .await?
            .ok_or(GameServiceError::WalletNotFound)?;
        if connection.user_id != user_id {
            return Err(GameServiceError::Forbidden);
        }
        if connection.removal_status == RemovalStatus::Pending {
            return Err(GameServiceError::RemovalAlreadyPending);
        }
        self.wallets
            .set_removal_request(connection.id, &input.reason, &input.email)
            .await
    }
}

// ── ListPendingRemovals (admin) ──────────────────────────────────────────────

pub struct ListPendingRemovalsUseCase<W: WalletRepository> {
    pub wallets: W,
}

impl<W: WalletRepository> ListPendingRemovalsUseCase<W> {
    pub async fn execute(&self) -> Result<Vec<WalletConnection>, GameServiceError> {
        self.wallets.list_pending_removals().await
    }
}

// ── ProcessWalletRemoval (admin) ─────────────────────────────────────────────

pub struct ProcessRemovalInput {
    pub address: String,
    pub status: RemovalStatus,
    pub notes: String,
}

pub struct ProcessRemovalUseCase<W: WalletRepository> {
    pub wallets: W,
    pub notifier: Arc<dyn Notifier>,
}

impl<W: WalletRepository> ProcessRemovalUseCase<W> {
    /// Approve or reject a pending removal. Approval deletes the connection;
    /// rejection records the decision on it. The requester notification is
    /// fire-and-forget: a send failure never rolls back the decision.
    pub async fn execute(
        &self,
        admin: &str,
        input: ProcessRemovalInput,
    ) -> Result<RemovalStatus, GameServiceError> {
        if !matches!(
            input.status,
            RemovalStatus::Approved | RemovalStatus::Rejected
        ) {
            return Err(GameServiceError::InvalidParameters);
        }

        let connection = self
            .wallets
            .find_by_address(&input.address.to_lowercase())
            .await?
            .ok_or(GameServiceError::WalletNotFound)?;
        if connection.removal_status != RemovalStatus::Pending {
            return Err(GameServiceError::NoPendingRemoval);
        }

        self.wallets
            .resolve_removal(connection.id, input.status, admin, &input.notes)
            .await?;
        if input.status == RemovalStatus::Approved {
            self.wallets.delete(connection.id).await?;
        }

        if !connection.removal_email.is_empty() {
            let notifier = Arc::clone(&self.notifier);
            let recipient = connection.removal_email.clone();
            let status = input.status;
            tokio::spawn(async move {
                notifier.notify(
                    &recipient,
                    "Wallet disconnection request processed",
                    &format!("Your wallet disconnection request was {}.", status.as_str()),
                );
            });
        }
        Ok(input.status)
    }
}

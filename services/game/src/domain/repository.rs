#![allow(async_fn_in_trait)]

use uuid::Uuid;

use deckhand_domain::inventory::CardDelta;
use deckhand_domain::wallet::RemovalStatus;

use crate::domain::types::{
    CardTemplate, PackTemplate, User, UserPatch, Variant, WalletConnection,
};
use crate::error::GameServiceError;

/// Repository for player documents.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, GameServiceError>;

    /// All users; only used by admin maintenance (FixVariants).
    async fn list_all(&self) -> Result<Vec<User>, GameServiceError>;

    /// Persist only the fields present in the patch.
    async fn apply_patch(&self, id: Uuid, patch: UserPatch) -> Result<(), GameServiceError>;
}

/// Read-only access to the card/pack/variant catalog.
pub trait CatalogRepository: Send + Sync {
    async fn get_card(&self, tid: &str) -> Result<Option<CardTemplate>, GameServiceError>;
    async fn all_cards(&self) -> Result<Vec<CardTemplate>, GameServiceError>;
    async fn get_pack(&self, tid: &str) -> Result<Option<PackTemplate>, GameServiceError>;
    async fn get_variant(&self, tid: &str) -> Result<Option<Variant>, GameServiceError>;
    async fn all_variants(&self) -> Result<Vec<Variant>, GameServiceError>;
    async fn default_variant(&self) -> Result<Option<Variant>, GameServiceError>;
}

/// Append-only activity log.
pub trait ActivityLog: Send + Sync {
    async fn append(
        &self,
        action: &str,
        username: &str,
        data: serde_json::Value,
    ) -> Result<(), GameServiceError>;
}

/// Picks the cards granted by opening one pack.
pub trait PackResolver: Send + Sync {
    async fn resolve(&self, pack: &PackTemplate) -> Result<Vec<CardDelta>, GameServiceError>;
}

/// Repository for wallet connections.
pub trait WalletRepository: Send + Sync {
    async fn find_by_address(
        &self,
        address: &str,
    ) -> Result<Option<WalletConnection>, GameServiceError>;
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<WalletConnection>, GameServiceError>;
    async fn list_pending_removals(&self) -> Result<Vec<WalletConnection>, GameServiceError>;
    async fn create(&self, connection: &WalletConnection) -> Result<(), GameServiceError>;
    async fn set_removal_request(
        &self,
        id: Uuid,
        reason: &str,
        email: &str,
    ) -> Result<(), GameServiceError>;
    async fn resolve_removal(
        &self,
        id: Uuid,
        status: RemovalStatus,
        admin: &str,
        notes: &str,
    ) -> Result<(), GameServiceError>;
    async fn delete(&self, id: Uuid) -> Result<(), GameServiceError>;
}

/// Best-effort outbound notification (admin emails in the original system).
/// Implementations must not be awaited for correctness; callers spawn them.
pub trait Notifier: Send + Sync + 'static {
    fn notify(&self, recipient: &str, subject: &str, body: &str);
}

use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use deckhand_domain::inventory::{CardDelta, OwnedCard, OwnedPack};
use deckhand_domain::permission::USER;
use deckhand_domain::wallet::RemovalStatus;
use deckhand_game::domain::repository::{
    ActivityLog, CatalogRepository, Notifier, PackResolver, UserRepository, WalletRepository,
};
use deckhand_game::domain::types::{
    CardTemplate, PackTemplate, User, UserPatch, Variant, WalletConnection,
};
use deckhand_game::error::GameServiceError;

// ── MockUserRepo ─────────────────────────────────────────────────────────────

pub struct MockUserRepo {
    users: Arc<Mutex<Vec<User>>>,
}

impl MockUserRepo {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
        }
    }

    /// Returns a shared handle to the internal user list for post-execution inspection.
    pub fn users_handle(&self) -> Arc<Mutex<Vec<User>>> {
        Arc::clone(&self.users)
    }
}

impl UserRepository for MockUserRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, GameServiceError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, GameServiceError> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn apply_patch(&self, id: Uuid, patch: UserPatch) -> Result<(), GameServiceError> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(GameServiceError::UserNotFound)?;
        if let Some(coins) = patch.coins {
            user.coins = coins;
        }
        if let Some(cards) = patch.cards {
            user.cards = cards;
        }
        if let Some(packs) = patch.packs {
            user.packs = packs;
        }
        if let Some(decks) = patch.decks {
            user.decks = decks;
        }
        if let Some(avatars) = patch.avatars {
            user.avatars = avatars;
        }
        if let Some(cardbacks) = patch.cardbacks {
            user.cardbacks = cardbacks;
        }
        user.updated_at = Utc::now();
        Ok(())
    }
}

// ── MockCatalog ──────────────────────────────────────────────────────────────

pub struct MockCatalog {
    pub cards: Vec<CardTemplate>,
    pub packs: Vec<PackTemplate>,
    pub variants: Vec<Variant>,
}

impl CatalogRepository for MockCatalog {
    async fn get_card(&self, tid: &str) -> Result<Option<CardTemplate>, GameServiceError> {
        Ok(self.cards.iter().find(|c| c.tid == tid).cloned())
    }

    async fn all_cards(&self) -> Result<Vec<CardTemplate>, GameServiceError> {
        Ok(self.cards.clone())
    }

    async fn get_pack(&self, tid: &str) -> Result<Option<PackTemplate>, GameServiceError> {
        Ok(self.packs.iter().find(|p| p.tid == tid).cloned())
    }

    async fn get_variant(&self, tid: &str) -> Result<Option<Variant>, GameServiceError> {
        Ok(self.variants.iter().find(|v| v.tid == tid).cloned())
    }

    async fn all_variants(&self) -> Result<Vec<Variant>, GameServiceError> {
        Ok(self.variants.clone())
    }

    async fn default_variant(&self) -> Result<Option<Variant>, GameServiceError> {
        Ok(self.variants.iter().find(|v| v.is_default).cloned())
    }
}

// ── MockActivityLog ──────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockActivityLog {
    entries: Arc<Mutex<Vec<(String, String, serde_json::Value)>>>,
    pub fail: bool,
}

impl MockActivityLog {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn entries_handle(&self) -> Arc<Mutex<Vec<(String, String, serde_json::Value)>>> {
        Arc::clone(&self.entries)
    }
}

impl ActivityLog for MockActivityLog {
    async fn append(
        &self,
        action: &str,
        username: &str,
        data: serde_json::Value,
    ) -> Result<(), GameServiceError> {
        if self.fail {
            return Err(GameServiceError::ActivityLogFailed(anyhow::anyhow!(
                "append failed"
            )));
        }
        self.entries
            .lock()
            .unwrap()
            .push((action.to_owned(), username.to_owned(), data));
        Ok(())
    }
}

// ── MockWalletRepo ───────────────────────────────────────────────────────────

pub struct MockWalletRepo {
    connections: Arc<Mutex<Vec<WalletConnection>>>,
}

impl MockWalletRepo {
    pub fn new(connections: Vec<WalletConnection>) -> Self {
        Self {
            connections: Arc::new(Mutex::new(connections)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn connections_handle(&self) -> Arc<Mutex<Vec<WalletConnection>>> {
        Arc::clone(&self.connections)
    }
}

impl WalletRepository for MockWalletRepo {
    async fn find_by_address(
        &self,
        address: &str,
    ) -> Result<Option<WalletConnection>, GameServiceError> {
        Ok(self
            .connections
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.wallet_address == address)
            .cloned())
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<WalletConnection>, GameServiceError> {
        Ok(self
            .connections
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn list_pending_removals(&self) -> Result<Vec<WalletConnection>, GameServiceError> {
        Ok(self
            .connections
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.removal_status == RemovalStatus::Pending)
            .cloned()
            .collect())
    }

    async fn create(&self, connection: &WalletConnection) -> Result<(), GameServiceError> {
        self.connections.lock().unwrap().push(connection.clone());
        Ok(())
    }

    async fn set_removal_request(
        &self,
        id: Uuid,
        reason: &str,
        email: &str,
    ) -> Result<(), GameServiceError> {
        let mut connections = self.connections.lock().unwrap();
        let connection = connections
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(GameServiceError::WalletNotFound)?;
        connection.removal_status = RemovalStatus::Pending;
        connection.removal_reason = reason.to_owned();
        connection.removal_email = email.to_owned();
        Ok(())
    }

    async fn resolve_removal(
        &self,
        id: Uuid,
        status: RemovalStatus,
        admin: &str,
        notes: &str,
    ) -> Result<(), GameServiceError> {
        let mut connections = self.connections.lock().unwrap();
        let connection = connections
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(GameServiceError::WalletNotFound)?;
        connection.removal_status = status;
        connection.processed_by = admin.to_owned();
        connection.admin_notes = notes.to_owned();
        connection.processed_at = Some(Utc::now());
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), GameServiceError> {
        self.connections.lock().unwrap().retain(|c| c.id != id);
        Ok(())
    }
}

// ── MockNotifier ─────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockNotifier {
    sent: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockNotifier {
    pub fn sent_handle(&self) -> Arc<Mutex<Vec<(String, String)>>> {
        Arc::clone(&self.sent)
    }
}

impl Notifier for MockNotifier {
    fn notify(&self, recipient: &str, subject: &str, _body: &str) {
        self.sent
            .lock()
            .unwrap()
            .push((recipient.to_owned(), subject.to_owned()));
    }
}

// ── FixedResolver ────────────────────────────────────────────────────────────

/// Pack resolver returning a preset draw, so tests control the pull.
pub struct FixedResolver {
    pub grants: Vec<CardDelta>,
}

impl PackResolver for FixedResolver {
    async fn resolve(
        &self,
        _pack: &PackTemplate,
    ) -> Result<Vec<CardDelta>, GameServiceError> {
        Ok(self.grants.clone())
    }
}

// ── fixtures ─────────────────────────────────────────────────────────────────

pub fn test_user() -> User {
    let now = Utc::now();
    User {
        id: Uuid::new_v4(),
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        permission: USER,
        coins: 5000,
        xp: 0,
        elo: 1000,
        cards: vec![],
        packs: vec![],
        decks: vec![],
        avatars: vec![],
        cardbacks: vec![],
        created_at: now,
        updated_at: now,
    }
}

pub fn owned_card(tid: &str, variant: &str, quantity: i64) -> OwnedCard {
    OwnedCard {
        tid: tid.to_owned(),
        variant: variant.to_owned(),
        quantity,
    }
}

pub fn owned_pack(tid: &str, quantity: i64) -> OwnedPack {
    OwnedPack {
        tid: tid.to_owned(),
        quantity,
    }
}

/// Catalog with one tradeable card (c1, 100 coins, common), one reward-only
/// card (c2, cost 0), one pack (p1, 250 coins, 3 slots) and two variants
/// (standard x1.0 default, foil x3.0).
pub fn catalog() -> MockCatalog {
    MockCatalog {
        cards: vec![
            CardTemplate {
                tid: "c1".to_owned(),
                name: "Deck Swabber".to_owned(),
                cost: 100,
                rarity: "common".to_owned(),
            },
            CardTemplate {
                tid: "c2".to_owned(),
                name: "Event Reward".to_owned(),
                cost: 0,
                rarity: "legendary".to_owned(),
            },
        ],
        packs: vec![PackTemplate {
            tid: "p1".to_owned(),
            name: "Starter Pack".to_owned(),
            cost: 250,
            cards_per_pack: 3,
            rarities: vec!["common".to_owned(), "common".to_owned(), "rare".to_owned()],
        }],
        variants: vec![
            Variant {
                tid: "standard".to_owned(),
                name: "Standard".to_owned(),
                cost_factor: 1.0,
                is_default: true,
            },
            Variant {
                tid: "foil".to_owned(),
                name: "Foil".to_owned(),
                cost_factor: 3.0,
                is_default: false,
            },
        ],
    }
}

pub fn wallet_connection(user_id: Uuid, address: &str, status: RemovalStatus) -> WalletConnection {
    let now = Utc::now();
    WalletConnection {
        id: Uuid::now_v7(),
        user_id,
        wallet_address: address.to_owned(),
        chain_id: "1".to_owned(),
        connected_at: now,
        last_used: now,
        removal_status: status,
        removal_reason: String::new(),
        removal_email: String::new(),
        admin_notes: String::new(),
        processed_by: String::new(),
        processed_at: None,
    }
}

use chrono::{DateTime, Utc};
use uuid::Uuid;

use deckhand_domain::deck::Deck;
use deckhand_domain::inventory::{OwnedCard, OwnedPack};
use deckhand_domain::wallet::RemovalStatus;

/// A player document: profile, balances and owned sub-documents.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub permission: u8,
    pub coins: i64,
    pub xp: i64,
    pub elo: i64,
    pub cards: Vec<OwnedCard>,
    pub packs: Vec<OwnedPack>,
    pub decks: Vec<Deck>,
    pub avatars: Vec<String>,
    pub cardbacks: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Card template from the catalog. `cost <= 0` means not tradeable.
#[derive(Debug, Clone)]
pub struct CardTemplate {
    pub tid: String,
    pub name: String,
    pub cost: i64,
    pub rarity: String,
}

/// Pack template from the catalog. `rarities` lists a rarity tag per card
/// slot; missing slots mean any rarity.
#[derive(Debug, Clone)]
pub struct PackTemplate {
    pub tid: String,
    pub name: String,
    pub cost: i64,
    pub cards_per_pack: i32,
    pub rarities: Vec<String>,
}

/// Card variant from the catalog.
#[derive(Debug, Clone)]
pub struct Variant {
    pub tid: String,
    pub name: String,
    pub cost_factor: f64,
    pub is_default: bool,
}

/// Partial update of a user document; only `Some` fields are written.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub coins: Option<i64>,
    pub cards: Option<Vec<OwnedCard>>,
    pub packs: Option<Vec<OwnedPack>>,
    pub decks: Option<Vec<Deck>>,
    pub avatars: Option<Vec<String>>,
    pub cardbacks: Option<Vec<String>>,
}

/// A wallet address linked to a user, with its removal-request state.
#[derive(Debug, Clone)]
pub struct WalletConnection {
    pub id: Uuid,
    pub user_id: Uuid,
    pub wallet_address: String,
    pub chain_id: String,
    pub connected_at: DateTime<Utc>,
    pub last_used: DateTime<Utc>,
    pub removal_status: RemovalStatus,
    pub removal_reason: String,
    pub removal_email: String,
    pub admin_notes: String,
    pub processed_by: String,
    pub processed_at: Option<DateTime<Utc>>,
}

use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use deckhand_domain::deck::Deck;
use deckhand_domain::inventory::{OwnedCard, OwnedPack};

/// Card holdings stored as a JSONB column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct CardList(pub Vec<OwnedCard>);

/// Pack holdings stored as a JSONB column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct PackList(pub Vec<OwnedPack>);

/// Deck list stored as a JSONB column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct DeckList(pub Vec<Deck>);

/// Owned cosmetic ids (avatars or cardbacks) stored as a JSONB column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct IdList(pub Vec<String>);

/// One document per player: profile, balances and owned sub-documents.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub permission: i16,
    pub coins: i64,
    pub xp: i64,
    pub elo: i64,
    #[sea_orm(column_type = "JsonBinary")]
    pub cards: CardList,
    #[sea_orm(column_type = "JsonBinary")]
    pub packs: PackList,
    #[sea_orm(column_type = "JsonBinary")]
    pub decks: DeckList,
    #[sea_orm(column_type = "JsonBinary")]
    pub avatars: IdList,
    #[sea_orm(column_type = "JsonBinary")]
    pub cardbacks: IdList,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::wallet_connections::Entity")]
    WalletConnections,
}

impl Related<super::wallet_connections::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WalletConnections.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

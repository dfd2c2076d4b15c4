use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Per-slot rarity tags used when opening a pack, stored as JSONB.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct RarityList(pub Vec<String>);

/// Pack template reference data; read-only for this service.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "packs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub tid: String,
    pub name: String,
    pub cost: i64,
    pub cards_per_pack: i32,
    #[sea_orm(column_type = "JsonBinary")]
    pub rarities: RarityList,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;

/// Card template reference data; read-only for this service.
/// A cost of zero or less means the card cannot be bought or sold.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cards")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub tid: String,
    pub name: String,
    pub cost: i64,
    pub rarity: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;

/// Card variant reference data (cosmetic/rarity modifier).
/// `cost_factor` multiplies a card's base cost; exactly one row is the
/// default used to backfill legacy entries without a variant.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "variants")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub tid: String,
    pub name: String,
    pub cost_factor: f64,
    pub is_default: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm_migration::prelude::*;

mod m20250801_000001_create_users;
mod m20250801_000002_create_cards;
mod m20250801_000003_create_packs;
mod m20250801_000004_create_variants;
mod m20250801_000005_create_activities;
mod m20250801_000006_create_wallet_connections;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_000001_create_users::Migration),
            Box::new(m20250801_000002_create_cards::Migration),
            Box::new(m20250801_000003_create_packs::Migration),
            Box::new(m20250801_000004_create_variants::Migration),
            Box::new(m20250801_000005_create_activities::Migration),
            Box::new(m20250801_000006_create_wallet_connections::Migration),
        ]
    }
}

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use deckhand_domain::market::MarketRules;

use crate::domain::repository::Notifier;
use crate::infra::db::{DbActivityLog, DbCatalogRepository, DbUserRepository, DbWalletRepository};
use crate::infra::notifier::TracingNotifier;
use crate::infra::pack_resolver::RandomPackResolver;
use crate::locks::UserLocks;

/// Shared service state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub rules: MarketRules,
    pub locks: UserLocks,
    pub notifier: Arc<dyn Notifier>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, rules: MarketRules) -> Self {
        Self {
            db: Arc::new(db),
            rules,
            locks: UserLocks::new(),
            notifier: Arc::new(TracingNotifier),
        }
    }

    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn catalog_repo(&self) -> DbCatalogRepository {
        DbCatalogRepository {
            db: self.db.clone(),
        }
    }

    pub fn activity_log(&self) -> DbActivityLog {
        DbActivityLog {
            db: self.db.clone(),
        }
    }

    pub fn wallet_repo(&self) -> DbWalletRepository {
        DbWalletRepository {
            db: self.db.clone(),
        }
    }

    pub fn pack_resolver(&self) -> RandomPackResolver<DbCatalogRepository> {
        RandomPackResolver {
            catalog: self.catalog_repo(),
        }
    }
}

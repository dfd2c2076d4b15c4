use std::sync::Arc;

use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};
use uuid::Uuid;

use deckhand_domain::wallet::RemovalStatus;
use deckhand_game_schema::{activities, cards, packs, users, variants, wallet_connections};

use crate::domain::repository::{ActivityLog, CatalogRepository, UserRepository, WalletRepository};
use crate::domain::types::{
    CardTemplate, PackTemplate, User, UserPatch, Variant, WalletConnection,
};
use crate::error::GameServiceError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: Arc<DatabaseConnection>,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, GameServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn list_all(&self) -> Result<Vec<User>, GameServiceError> {
        let models = users::Entity::find()
            .all(&*self.db)
            .await
            .context("list all users")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn apply_patch(&self, id: Uuid, patch: UserPatch) -> Result<(), GameServiceError> {
        let mut am = users::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(coins) = patch.coins {
            am.coins = Set(coins);
        }
        if let Some(cards) = patch.cards {
            am.cards = Set(users::CardList(cards));
        }
        if let Some(packs) = patch.packs {
            am.packs = Set(users::PackList(packs));
        }
        if let Some(decks) = patch.decks {
            am.decks = Set(users::DeckList(decks));
        }
        if let Some(avatars) = patch.avatars {
            am.avatars = Set(users::IdList(avatars));
        }
        if let Some(cardbacks) = patch.cardbacks {
            am.cardbacks = Set(users::IdList(cardbacks));
        }
        am.updated_at = Set(Utc::now());
        am.update(&*self.db).await.context("apply user patch")?;
        Ok(())
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        username: model.username,
        email: model.email,
        permission: model.permission as u8,
        coins: model.coins,
        xp: model.xp,
        elo: model.elo,
        cards: model.cards.0,
        packs: model.packs.0,
        decks: model.decks.0,
        avatars: model.avatars.0,
        cardbacks: model.cardbacks.0,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Catalog repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCatalogRepository {
    pub db: Arc<DatabaseConnection>,
}

impl CatalogRepository for DbCatalogRepository {
    async fn get_card(&self, tid: &str) -> Result<Option<CardTemplate>, GameServiceError> {
        let model = cards::Entity::find_by_id(tid.to_owned())
            .one(&*self.db)
            .await
            .context("find card template")?;
        Ok(model.map(card_from_model))
    }

    async fn all_cards(&self) -> Result<Vec<CardTemplate>, GameServiceError> {
        let models = cards::Entity::find()
            .all(&*self.db)
            .await
            .context("list card templates")?;
        Ok(models.into_iter().map(card_from_model).collect())
    }

    async fn get_pack(&self, tid: &str) -> Result<Option<PackTemplate>, GameServiceError> {
        let model = packs::Entity::find_by_id(tid.to_owned())
            .one(&*self.db)
            .await
            .context("find pack template")?;
        Ok(model.map(pack_from_model))
    }

    async fn get_variant(&self, tid: &str) -> Result<Option<Variant>, GameServiceError> {
        let model = variants::Entity::find_by_id(tid.to_owned())
            .one(&*self.db)
            .await
            .context("find variant")?;
        Ok(model.map(variant_from_model))
    }

    async fn all_variants(&self) -> Result<Vec<Variant>, GameServiceError> {
        let models = variants::Entity::find()
            .all(&*self.db)
            .await
            .context("list variants")?;
        Ok(models.into_iter().map(variant_from_model).collect())
    }

    async fn default_variant(&self) -> Result<Option<Variant>, GameServiceError> {
        let model = variants::Entity::find()
            .filter(variants::Column::IsDefault.eq(true))
            .one(&*self.db)
            .await
            .context("find default variant")?;
        Ok(model.map(variant_from_model))
    }
}

fn card_from_model(model: cards::Model) -> CardTemplate {
    CardTemplate {
        tid: model.tid,
        name: model.name,
        cost: model.cost,
        rarity: model.rarity,
    }
}

fn pack_from_model(model: packs::Model) -> PackTemplate {
    PackTemplate {
        tid: model.tid,
        name: model.name,
        cost: model.cost,
        cards_per_pack: model.cards_per_pack,
        rarities: model.rarities.0,
    }
}

fn variant_from_model(model: variants::Model) -> Variant {
    Variant {
        tid: model.tid,
        name: model.name,
        cost_factor: model.cost_factor,
        is_default: model.is_default,
    }
}

// ── Activity log ─────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbActivityLog {
    pub db: Arc<DatabaseConnection>,
}

impl ActivityLog for DbActivityLog {
    /// Called after the user mutation is already persisted, so a failure here
    /// maps to the distinct `ActivityLogFailed` kind rather than `Internal`.
    async fn append(
        &self,
        action: &str,
        username: &str,
        data: serde_json::Value,
    ) -> Result<(), GameServiceError> {
        activities::ActiveModel {
            id: Set(Uuid::now_v7()),
            action: Set(action.to_owned()),
            username: Set(username.to_owned()),
            data: Set(data),
            created_at: Set(Utc::now()),
        }
        .insert(&*self.db)
        .await
        .map_err(|e| GameServiceError::ActivityLogFailed(e.into()))?;
        Ok(())
    }
}

// ── Wallet repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbWalletRepository {
    pub db: Arc<DatabaseConnection>,
}

impl WalletRepository for DbWalletRepository {
    async fn find_by_address(
        &self,
        address: &str,
    ) -> Result<Option<WalletConnection>, GameServiceError> {
        let model = wallet_connections::Entity::find()
            .filter(wallet_connections::Column::WalletAddress.eq(address))
            .one(&*self.db)
            .await
            .context("find wallet connection by address")?;
        model.map(wallet_from_model).transpose()
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<WalletConnection>, GameServiceError> {
        let models = wallet_connections::Entity::find()
            .filter(wallet_connections::Column::UserId.eq(user_id))
            .all(&*self.db)
            .await
            .context("list wallet connections by user")?;
        models.into_iter().map(wallet_from_model).collect()
    }

    async fn list_pending_removals(&self) -> Result<Vec<WalletConnection>, GameServiceError> {
        let models = wallet_connections::Entity::find()
            .filter(
                wallet_connections::Column::RemovalStatus.eq(RemovalStatus::Pending.as_str()),
            )
            .all(&*self.db)
            .await
            .context("list pending wallet removals")?;
        models.into_iter().map(wallet_from_model).collect()
    }

    async fn create(&self, connection: &WalletConnection) -> Result<(), GameServiceError> {
        wallet_connections::ActiveModel {
            id: Set(connection.id),
            user_id: Set(connection.user_id),
            wallet_address: Set(connection.wallet_address.clone()),
            chain_id: Set(connection.chain_id.clone()),
            connected_at: Set(connection.connected_at),
            last_used: Set(connection.last_used),
            removal_status: Set(connection.removal_status.as_str().to_owned()),
            removal_reason: Set(connection.removal_reason.clone()),
            removal_email: Set(connection.removal_email.clone()),
            admin_notes: Set(connection.admin_notes.clone()),
            processed_by: Set(connection.processed_by.clone()),
            processed_at: Set(connection.processed_at),
        }
        .insert(&*self.db)
        .await
        .context("create wallet connection")?;
        Ok(())
    }

    async fn set_removal_request(
        &self,
        id: Uuid,
        reason: &str,
        email: &str,
    ) -> Result<(), GameServiceError> {
        wallet_connections::ActiveModel {
            id: Set(id),
            removal_status: Set(RemovalStatus::Pending.as_str().to_owned()),
            removal_reason: Set(reason.to_owned()),
            removal_email: Set(email.to_owned()),
            ..Default::default()
        }
        .update(&*self.db)
        .await
        .context("set wallet removal request")?;
        Ok(())
    }

    async fn resolve_removal(
        &self,
        id: Uuid,
        status: RemovalStatus,
        admin: &str,
        notes: &str,
    ) -> Result<(), GameServiceError> {
        wallet_connections::ActiveModel {
            id: Set(id),
            removal_status: Set(status.as_str().to_owned()),
            admin_notes: Set(notes.to_owned()),
            processed_by: Set(admin.to_owned()),
            processed_at: Set(Some(Utc::now())),
            ..Default::default()
        }
        .update(&*self.db)
        .await
        .context("resolve wallet removal")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), GameServiceError> {
        wallet_connections::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .context("delete wallet connection")?;
        Ok(())
    }
}

fn wallet_from_model(
    model: wallet_connections::Model,
) -> Result<WalletConnection, GameServiceError> {
    let removal_status = RemovalStatus::from_str(&model.removal_status)
        .ok_or_else(|| anyhow::anyhow!("unknown removal status {:?}", model.removal_status))?;
    Ok(WalletConnection {
        id: model.id,
        user_id: model.user_id,
        wallet_address: model.wallet_address,
        chain_id: model.chain_id,
        connected_at: model.connected_at,
        last_used: model.last_used,
        removal_status,
        removal_reason: model.removal_reason,
        removal_email: model.removal_email,
        admin_notes: model.admin_notes,
        processed_by: model.processed_by,
        processed_at: model.processed_at,
    })
}

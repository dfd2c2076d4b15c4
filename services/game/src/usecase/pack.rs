use uuid::Uuid;

use deckhand_domain::inventory::{
    CardDelta, PackDelta, apply_card_deltas, apply_pack_deltas, pack_count,
};
use deckhand_domain::market::MarketRules;
use deckhand_domain::pricing::{DEFAULT_COST_FACTOR, purchase_cost, sale_value};

use crate::domain::repository::{ActivityLog, CatalogRepository, PackResolver, UserRepository};
use crate::domain::types::UserPatch;
use crate::error::GameServiceError;
use crate::usecase::card::load_user;

// ── BuyPack ──────────────────────────────────────────────────────────────────

pub struct BuyPackInput {
    pub pack: String,
    pub quantity: i64,
}

pub struct BuyPackUseCase<U: UserRepository, C: CatalogRepository, A: ActivityLog> {
    pub users: U,
    pub catalog: C,
    pub activity: A,
}

impl<U: UserRepository, C: CatalogRepository, A: ActivityLog> BuyPackUseCase<U, C, A> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        input: BuyPackInput,
    ) -> Result<(), GameServiceError> {
        let mut user = load_user(&self.users, user_id).await?;
        let pack = self
            .catalog
            .get_pack(&input.pack)
            .await?
            .ok_or(GameServiceError::PackNotFound)?;
        if pack.cost <= 0 {
            return Err(GameServiceError::NotTradeable);
        }

        let cost = purchase_cost(pack.cost, DEFAULT_COST_FACTOR, input.quantity);
        if user.coins < cost {
            return Err(GameServiceError::NotEnoughCoins);
        }
        user.coins -= cost;

        apply_pack_deltas(
            &mut user.packs,
            &[PackDelta {
                tid: input.pack.clone(),
                quantity: input.quantity,
            }],
        )
        .map_err(|e| GameServiceError::Internal(e.into()))?;

        self.users
            .apply_patch(
                user_id,
                UserPatch {
                    coins: Some(user.coins),
                    packs: Some(user.packs),
                    ..Default::default()
                },
            )
            .await?;

        let data = serde_json::json!({"pack": input.pack, "quantity": input.quantity});
        self.activity
            .append("user_buy_pack", &user.username, data)
            .await?;
        Ok(())
    }
}

// ── SellPack ─────────────────────────────────────────────────────────────────

pub struct SellPackInput {
    pub pack: String,
    pub quantity: i64,
}

pub struct SellPackUseCase<U: UserRepository, C: CatalogRepository, A: ActivityLog> {
    pub users: U,
    pub catalog: C,
    pub activity: A,
    pub rules: MarketRules,
}

impl<U: UserRepository, C: CatalogRepository, A: ActivityLog> SellPackUseCase<U, C, A> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        input: SellPackInput,
    ) -> Result<(), GameServiceError> {
        let mut user = load_user(&self.users, user_id).await?;
        let pack = self
            .catalog
            .get_pack(&input.pack)
            .await?
            .ok_or(GameServiceError::PackNotFound)?;
        if pack.cost <= 0 {
            return Err(GameServiceError::NotTradeable);
        }
        if pack_count(&user.packs, &input.pack) < input.quantity {
            return Err(GameServiceError::NotEnoughPacks);
        }

        user.coins += sale_value(
            pack.cost,
            DEFAULT_COST_FACTOR,
            input.quantity,
            self.rules.sell_ratio,
        );

        apply_pack_deltas(
            &mut user.packs,
            &[PackDelta {
                tid: input.pack.clone(),
                quantity: -input.quantity,
            }],
        )
        .map_err(|e| GameServiceError::Internal(e.into()))?;

        self.users
            .apply_patch(
                user_id,
                UserPatch {
                    coins: Some(user.coins),
                    packs: Some(user.packs),
                    ..Default::default()
                },
            )
            .await?;

        let data = serde_json::json!({"pack": input.pack, "quantity": input.quantity});
        self.activity
            .append("user_sell_pack", &user.username, data)
            .await?;
        Ok(())
    }
}

// ── OpenPack ─────────────────────────────────────────────────────────────────

pub struct OpenPackUseCase<U, C, A, P>
where
    U: UserRepository,
    C: CatalogRepository,
    A: ActivityLog,
    P: PackResolver,
{
    pub users: U,
    pub catalog: C,
    pub activity: A,
    pub resolver: P,
}

impl<U, C, A, P> OpenPackUseCase<U, C, A, P>
where
    U: UserRepository,
    C: CatalogRepository,
    A: ActivityLog,
    P: PackResolver,
{
    /// Consume one pack and grant its cards. Returns the granted deltas so
    /// the client can show what was pulled.
    pub async fn execute(
        &self,
        user_id: Uuid,
        pack_tid: &str,
    ) -> Result<Vec<CardDelta>, GameServiceError> {
        let mut user = load_user(&self.users, user_id).await?;
        let pack = self
            .catalog
            .get_pack(pack_tid)
            .await?
            .ok_or(GameServiceError::PackNotFound)?;
        if pack_count(&user.packs, pack_tid) < 1 {
            return Err(GameServiceError::NotEnoughPacks);
        }

        let grants = self.resolver.resolve(&pack).await?;

        apply_card_deltas(&mut user.cards, &grants)
            .map_err(|e| GameServiceError::Internal(e.into()))?;
        apply_pack_deltas(
            &mut user.packs,
            &[PackDelta {
                tid: pack_tid.to_owned(),
                quantity: -1,
            }],
        )
        .map_err(|e| GameServiceError::Internal(e.into()))?;

        self.users
            .apply_patch(
                user_id,
                UserPatch {
                    cards: Some(user.cards),
                    packs: Some(user.packs),
                    ..Default::default()
                },
            )
            .await?;

        let data = serde_json::json!({"pack": pack_tid, "cards": grants});
        self.activity
            .append("user_open_pack", &user.username, data)
            .await?;
        Ok(grants)
    }
}

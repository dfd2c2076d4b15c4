use std::collections::HashMap;

use uuid::Uuid;

use deckhand_domain::inventory::{CardDelta, apply_card_deltas, card_count};
use deckhand_domain::market::MarketRules;
use deckhand_domain::pricing::{DEFAULT_COST_FACTOR, purchase_cost, sale_value};

use crate::domain::repository::{ActivityLog, CatalogRepository, UserRepository};
use crate::domain::types::{User, UserPatch};
use crate::error::GameServiceError;

// ── BuyCard ──────────────────────────────────────────────────────────────────

pub struct BuyCardInput {
    pub card: String,
    pub variant: String,
    pub quantity: i64,
}

pub struct BuyCardUseCase<U: UserRepository, C: CatalogRepository, A: ActivityLog> {
    pub users: U,
    pub catalog: C,
    pub activity: A,
}

impl<U: UserRepository, C: CatalogRepository, A: ActivityLog> BuyCardUseCase<U, C, A> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        input: BuyCardInput,
    ) -> Result<(), GameServiceError> {
        let mut user = load_user(&self.users, user_id).await?;
        let card = self
            .catalog
            .get_card(&input.card)
            .await?
            .ok_or(GameServiceError::CardNotFound)?;
        if card.cost <= 0 {
            return Err(GameServiceError::NotTradeable);
        }

        let factor = variant_factor(&self.catalog, &input.variant).await?;
        let cost = purchase_cost(card.cost, factor, input.quantity);
        if user.coins < cost {
            return Err(GameServiceError::NotEnoughCoins);
        }
        user.coins -= cost;

        apply_card_deltas(
            &mut user.cards,
            &[CardDelta {
                tid: input.card.clone(),
                variant: input.variant.clone(),
                quantity: input.quantity,
            }],
        )
        .map_err(|e| GameServiceError::Internal(e.into()))?;

        self.users
            .apply_patch(
                user_id,
                UserPatch {
                    coins: Some(user.coins),
                    cards: Some(user.cards),
                    ..Default::default()
                },
            )
            .await?;

        let data = serde_json::json!({
            "card": input.card,
            "variant": input.variant,
            "quantity": input.quantity,
        });
        self.activity
            .append("user_buy_card", &user.username, data)
            .await?;
        Ok(())
    }
}

// ── SellCard ─────────────────────────────────────────────────────────────────

pub struct SellCardInput {
    pub card: String,
    pub variant: String,
    pub quantity: i64,
}

pub struct SellCardUseCase<U: UserRepository, C: CatalogRepository, A: ActivityLog> {
    pub users: U,
    pub catalog: C,
    pub activity: A,
    pub rules: MarketRules,
}

impl<U: UserRepository, C: CatalogRepository, A: ActivityLog> SellCardUseCase<U, C, A> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        input: SellCardInput,
    ) -> Result<(), GameServiceError> {
        let mut user = load_user(&self.users, user_id).await?;
        let card = self
            .catalog
            .get_card(&input.card)
            .await?
            .ok_or(GameServiceError::CardNotFound)?;
        if card.cost <= 0 {
            return Err(GameServiceError::NotTradeable);
        }
        if card_count(&user.cards, &input.card, &input.variant) < input.quantity {
            return Err(GameServiceError::NotEnoughCards);
        }

        let factor = variant_factor(&self.catalog, &input.variant).await?;
        user.coins += sale_value(card.cost, factor, input.quantity, self.rules.sell_ratio);

        apply_card_deltas(
            &mut user.cards,
            &[CardDelta {
                tid: input.card.clone(),
                variant: input.variant.clone(),
                quantity: -input.quantity,
            }],
        )
        .map_err(|e| GameServiceError::Internal(e.into()))?;

        self.users
            .apply_patch(
                user_id,
                UserPatch {
                    coins: Some(user.coins),
                    cards: Some(user.cards),
                    ..Default::default()
                },
            )
            .await?;

        let data = serde_json::json!({
            "card": input.card,
            "variant": input.variant,
            "quantity": input.quantity,
        });
        self.activity
            .append("user_sell_card", &user.username, data)
            .await?;
        Ok(())
    }
}

// ── SellDuplicateCards ───────────────────────────────────────────────────────

pub struct SellDuplicatesInput {
    /// Only sell cards of this rarity when set.
    pub rarity: Option<String>,
    /// Only sell entries of this variant when set.
    pub variant: Option<String>,
    /// Copies of each (card, variant) pair to keep.
    pub keep: i64,
}

/// Result summary; the HTTP response body stays empty either way.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SellDuplicatesOutcome {
    pub entries_sold: usize,
    pub coins_gained: i64,
}

pub struct SellDuplicatesUseCase<U: UserRepository, C: CatalogRepository, A: ActivityLog> {
    pub users: U,
    pub catalog: C,
    pub activity: A,
    pub rules: MarketRules,
}

impl<U: UserRepository, C: CatalogRepository, A: ActivityLog> SellDuplicatesUseCase<U, C, A> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        input: SellDuplicatesInput,
    ) -> Result<SellDuplicatesOutcome, GameServiceError> {
        let mut user = load_user(&self.users, user_id).await?;
        let templates_by_tid: HashMap<String, (i64, String)> = self
            .catalog
            .all_cards()
            .await?
            .into_iter()
            .map(|c| (c.tid, (c.cost, c.rarity)))
            .collect();
        let factors_by_tid: HashMap<String, f64> = self
            .catalog
            .all_variants()
            .await?
            .into_iter()
            .map(|v| (v.tid, v.cost_factor))
            .collect();

        let mut deltas = vec![];
        let mut coins = 0;
        for owned in &user.cards {
            let Some((cost, card_rarity)) = templates_by_tid.get(&owned.tid) else {
                continue;
            };
            let cost = *cost;
            if cost <= 0 || owned.quantity <= input.keep {
                continue;
            }
            if let Some(ref variant) = input.variant {
                if owned.variant != *variant {
                    continue;
                }
            }
            if let Some(ref rarity) = input.rarity {
                if card_rarity != rarity {
                    continue;
                }
            }
            let factor = factors_by_tid
                .get(&owned.variant)
                .copied()
                .unwrap_or(DEFAULT_COST_FACTOR);
            let excess = owned.quantity - input.keep;
            coins += sale_value(cost, factor, excess, self.rules.sell_ratio);
            deltas.push(CardDelta {
                tid: owned.tid.clone(),
                variant: owned.variant.clone(),
                quantity: -excess,
            });
        }

        if deltas.is_empty() {
            return Ok(SellDuplicatesOutcome::default());
        }

        user.coins += coins;
        apply_card_deltas(&mut user.cards, &deltas)
            .map_err(|e| GameServiceError::Internal(e.into()))?;

        self.users
            .apply_patch(
                user_id,
                UserPatch {
                    coins: Some(user.coins),
                    cards: Some(user.cards),
                    ..Default::default()
                },
            )
            .await?;

        let data = serde_json::json!({
            "rarity": input.rarity.unwrap_or_default(),
            "variant": input.variant.unwrap_or_default(),
            "keep": input.keep,
        });
        self.activity
            .append("user_sell_cards_duplicate", &user.username, data)
            .await?;

        Ok(SellDuplicatesOutcome {
            entries_sold: deltas.len(),
            coins_gained: coins,
        })
    }
}

// ── shared lookups ───────────────────────────────────────────────────────────

pub(crate) async fn load_user<U: UserRepository>(
    users: &U,
    user_id: Uuid,
) -> Result<User, GameServiceError> {
    users
        .find_by_id(user_id)
        .await?
        .ok_or(GameServiceError::UserNotFound)
}

/// Cost factor for a variant id; unknown or empty variants fall back to 1.
pub(crate) async fn variant_factor<C: CatalogRepository>(
    catalog: &C,
    variant: &str,
) -> Result<f64, GameServiceError> {
    if variant.is_empty() {
        return Ok(DEFAULT_COST_FACTOR);
    }
    Ok(catalog
        .get_variant(variant)
        .await?
        .map_or(DEFAULT_COST_FACTOR, |v| v.cost_factor))
}

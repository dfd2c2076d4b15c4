use std::collections::HashMap;

use rand::RngExt;

use deckhand_domain::inventory::CardDelta;

use crate::domain::repository::{CatalogRepository, PackResolver};
use crate::domain::types::PackTemplate;
use crate::error::GameServiceError;

/// Resolves pack openings by drawing uniformly from the catalog, honoring
/// the per-slot rarity tags on the pack template.
#[derive(Clone)]
pub struct RandomPackResolver<C: CatalogRepository> {
    pub catalog: C,
}

impl<C: CatalogRepository> PackResolver for RandomPackResolver<C> {
    async fn resolve(&self, pack: &PackTemplate) -> Result<Vec<CardDelta>, GameServiceError> {
        let cards = self.catalog.all_cards().await?;
        if cards.is_empty() {
            return Err(GameServiceError::Internal(anyhow::anyhow!(
                "card catalog is empty, cannot resolve pack {:?}",
                pack.tid
            )));
        }
        let variant = self
            .catalog
            .default_variant()
            .await?
            .map(|v| v.tid)
            .unwrap_or_default();

        let mut pools: HashMap<&str, Vec<&str>> = HashMap::new();
        for card in &cards {
            pools.entry(card.rarity.as_str()).or_default().push(&card.tid);
        }
        let any: Vec<&str> = cards.iter().map(|c| c.tid.as_str()).collect();

        // Draws are synchronous so the rng never lives across an await.
        let mut counts: HashMap<String, i64> = HashMap::new();
        {
            let mut rng = rand::rng();
            for slot in 0..pack.cards_per_pack as usize {
                let pool = pack
                    .rarities
                    .get(slot)
                    .and_then(|rarity| pools.get(rarity.as_str()))
                    .filter(|pool| !pool.is_empty())
                    .unwrap_or(&any);
                let tid = pool[rng.random_range(0..pool.len())];
                *counts.entry(tid.to_owned()).or_insert(0) += 1;
            }
        }

        Ok(counts
            .into_iter()
            .map(|(tid, quantity)| CardDelta {
                tid,
                variant: variant.clone(),
                quantity,
            })
            .collect())
    }
}

use deckhand_domain::inventory::CardDelta;
use deckhand_domain::inventory::apply_card_deltas;

use crate::domain::repository::{ActivityLog, CatalogRepository, UserRepository};
use crate::domain::types::UserPatch;
use crate::error::GameServiceError;

// ── FixVariants ──────────────────────────────────────────────────────────────

pub struct FixVariantsInput {
    /// Source variant id to remap; must be paired with `to`.
    pub from: Option<String>,
    /// Target variant id for the remap; must be paired with `from`.
    pub to: Option<String>,
}

pub struct FixVariantsUseCase<U: UserRepository, C: CatalogRepository, A: ActivityLog> {
    pub users: U,
    pub catalog: C,
    pub activity: A,
}

impl<U: UserRepository, C: CatalogRepository, A: ActivityLog> FixVariantsUseCase<U, C, A> {
    /// Backfill legacy card entries lacking a variant with the default
    /// variant, optionally remapping `from` to `to` across all users.
    /// Rebuilds each touched card list through the delta helper so the
    /// (tid, variant) uniqueness invariant is re-established even when a
    /// remap makes two entries collide. Returns the number of users updated.
    pub async fn execute(
        &self,
        actor: &str,
        input: FixVariantsInput,
    ) -> Result<u64, GameServiceError> {
        let remap = match (&input.from, &input.to) {
            (Some(from), Some(to)) if !from.is_empty() && !to.is_empty() => {
                Some((from.clone(), to.clone()))
            }
            (None, None) => None,
            // A one-sided or empty remap is a malformed request.
            _ => return Err(GameServiceError::InvalidParameters),
        };

        let default_tid = self
            .catalog
            .default_variant()
            .await?
            .map(|v| v.tid)
            .unwrap_or_default();

        let users = self.users.list_all().await?;
        let mut updated = 0;
        for user in users {
            let mut changed = false;
            let mut deltas = Vec::with_capacity(user.cards.len());
            for owned in &user.cards {
                let mut variant = owned.variant.clone();
                if variant.is_empty() {
                    variant = default_tid.clone();
                    changed = true;
                }
                if let Some((from, to)) = &remap {
                    if variant == *from {
                        variant = to.clone();
                        changed = true;
                    }
                }
                deltas.push(CardDelta {
                    tid: owned.tid.clone(),
                    variant,
                    quantity: owned.quantity,
                });
            }

            if !changed {
                continue;
            }

            let mut rebuilt = vec![];
            apply_card_deltas(&mut rebuilt, &deltas)
                .map_err(|e| GameServiceError::Internal(e.into()))?;
            self.users
                .apply_patch(
                    user.id,
                    UserPatch {
                        cards: Some(rebuilt),
                        ..Default::default()
                    },
                )
                .await?;
            updated += 1;
        }

        self.activity
            .append("fix_variants", actor, serde_json::json!({}))
            .await?;
        Ok(updated)
    }
}

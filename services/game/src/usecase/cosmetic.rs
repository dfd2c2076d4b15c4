use uuid::Uuid;

use deckhand_domain::market::MarketRules;

use crate::domain::repository::{ActivityLog, UserRepository};
use crate::domain::types::UserPatch;
use crate::error::GameServiceError;
use crate::usecase::card::load_user;

/// Which cosmetic set a purchase goes into; both behave identically apart
/// from price and storage field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CosmeticKind {
    Avatar,
    Cardback,
}

pub struct BuyCosmeticUseCase<U: UserRepository, A: ActivityLog> {
    pub users: U,
    pub activity: A,
    pub rules: MarketRules,
}

impl<U: UserRepository, A: ActivityLog> BuyCosmeticUseCase<U, A> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        kind: CosmeticKind,
        cosmetic_tid: &str,
    ) -> Result<(), GameServiceError> {
        let mut user = load_user(&self.users, user_id).await?;
        let cost = match kind {
            CosmeticKind::Avatar => self.rules.avatar_cost,
            CosmeticKind::Cardback => self.rules.cardback_cost,
        };
        if user.coins < cost {
            return Err(GameServiceError::NotEnoughCoins);
        }

        let owned = match kind {
            CosmeticKind::Avatar => &mut user.avatars,
            CosmeticKind::Cardback => &mut user.cardbacks,
        };
        if owned.iter().any(|id| id == cosmetic_tid) {
            return Err(GameServiceError::AlreadyOwned);
        }
        owned.push(cosmetic_tid.to_owned());

        user.coins -= cost;
        let patch = match kind {
            CosmeticKind::Avatar => UserPatch {
                coins: Some(user.coins),
                avatars: Some(user.avatars),
                ..Default::default()
            },
            CosmeticKind::Cardback => UserPatch {
                coins: Some(user.coins),
                cardbacks: Some(user.cardbacks),
                ..Default::default()
            },
        };
        self.users.apply_patch(user_id, patch).await?;

        let (action, data) = match kind {
            CosmeticKind::Avatar => ("user_buy_avatar", serde_json::json!({"avatar": cosmetic_tid})),
            CosmeticKind::Cardback => (
                "user_buy_cardback",
                serde_json::json!({"cardback": cosmetic_tid}),
            ),
        };
        self.activity.append(action, &user.username, data).await?;
        Ok(())
    }
}

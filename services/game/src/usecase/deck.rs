use uuid::Uuid;

use deckhand_domain::deck::{Deck, delete_deck, upsert_deck};

use crate::domain::repository::UserRepository;
use crate::domain::types::UserPatch;
use crate::error::GameServiceError;
use crate::usecase::card::load_user;

// ── UpdateDeck ───────────────────────────────────────────────────────────────

pub struct UpdateDeckUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> UpdateDeckUseCase<U> {
    /// Create, replace or (via an empty card list) delete the deck with the
    /// given tid, returning the resulting deck list.
    pub async fn execute(&self, user_id: Uuid, deck: Deck) -> Result<Vec<Deck>, GameServiceError> {
        let user = load_user(&self.users, user_id).await?;
        let mut decks = user.decks;
        upsert_deck(&mut decks, deck);
        self.users
            .apply_patch(
                user_id,
                UserPatch {
                    decks: Some(decks.clone()),
                    ..Default::default()
                },
            )
            .await?;
        Ok(decks)
    }
}

// ── DeleteDeck ───────────────────────────────────────────────────────────────

pub struct DeleteDeckUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> DeleteDeckUseCase<U> {
    /// Remove the deck with the given tid if present; a miss is a no-op.
    pub async fn execute(
        &self,
        user_id: Uuid,
        deck_tid: &str,
    ) -> Result<Vec<Deck>, GameServiceError> {
        let user = load_user(&self.users, user_id).await?;
        let mut decks = user.decks;
        delete_deck(&mut decks, deck_tid);
        self.users
            .apply_patch(
                user_id,
                UserPatch {
                    decks: Some(decks.clone()),
                    ..Default::default()
                },
            )
            .await?;
        Ok(decks)
    }
}

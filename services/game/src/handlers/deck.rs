use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;

use deckhand_auth_types::identity::IdentityHeaders;
use deckhand_domain::deck::{Deck, DeckCard};

use crate::error::GameServiceError;
use crate::handlers::required_id;
use crate::state::AppState;
use crate::usecase::deck::{DeleteDeckUseCase, UpdateDeckUseCase};

#[derive(Debug, Deserialize)]
pub struct UpdateDeckRequest {
    pub title: Option<String>,
    #[serde(default)]
    pub hero: Option<DeckCard>,
    #[serde(default)]
    pub cards: Option<Vec<DeckCard>>,
}

pub async fn update_deck(
    State(state): State<AppState>,
    identity: IdentityHeaders,
    Path(deck_id): Path<String>,
    Json(req): Json<UpdateDeckRequest>,
) -> Result<Json<Vec<Deck>>, GameServiceError> {
    required_id(&deck_id)?;
    let deck = Deck {
        tid: deck_id,
        title: req.title.unwrap_or_else(|| "Deck".to_owned()),
        hero: req.hero,
        cards: req.cards.unwrap_or_default(),
    };

    let _guard = state.locks.acquire(identity.user_id).await;
    let decks = UpdateDeckUseCase {
        users: state.user_repo(),
    }
    .execute(identity.user_id, deck)
    .await?;
    Ok(Json(decks))
}

pub async fn delete_deck(
    State(state): State<AppState>,
    identity: IdentityHeaders,
    Path(deck_id): Path<String>,
) -> Result<Json<Vec<Deck>>, GameServiceError> {
    required_id(&deck_id)?;

    let _guard = state.locks.acquire(identity.user_id).await;
    let decks = DeleteDeckUseCase {
        users: state.user_repo(),
    }
    .execute(identity.user_id, &deck_id)
    .await?;
    Ok(Json(decks))
}

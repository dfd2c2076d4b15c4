//! User deck list and its upsert/delete rules.

use serde::{Deserialize, Serialize};

/// A card reference inside a deck or as a hero pick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckCard {
    pub tid: String,
    #[serde(default)]
    pub variant: String,
}

/// A named deck. The tid is a client-chosen token, unique within a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub tid: String,
    pub title: String,
    #[serde(default)]
    pub hero: Option<DeckCard>,
    #[serde(default)]
    pub cards: Vec<DeckCard>,
}

/// Upsert a deck by tid. An existing deck is replaced in place; submitting
/// an empty card list deletes it. A new deck is only added when its card
/// list is non-empty, so an empty deck is never persisted.
pub fn upsert_deck(decks: &mut Vec<Deck>, deck: Deck) {
    match decks.iter().position(|d| d.tid == deck.tid) {
        Some(i) if deck.cards.is_empty() => {
            decks.remove(i);
        }
        Some(i) => decks[i] = deck,
        None if !deck.cards.is_empty() => decks.push(deck),
        None => {}
    }
}

/// Remove the first deck matching tid, if any. Idempotent.
pub fn delete_deck(decks: &mut Vec<Deck>, tid: &str) {
    if let Some(i) = decks.iter().position(|d| d.tid == tid) {
        decks.remove(i);
    }
}

//! Owned card/pack holdings and the delta-application rules.
//!
//! Holdings are stored as ordered lists but indexed by key while deltas are
//! applied, so each delta costs O(1). After application no two entries share
//! a key and every entry has a positive quantity.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A card the user owns: one entry per (tid, variant) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedCard {
    pub tid: String,
    /// Variant tid; empty for legacy entries written before variants existed.
    #[serde(default)]
    pub variant: String,
    pub quantity: i64,
}

/// A pack the user owns: one entry per tid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedPack {
    pub tid: String,
    pub quantity: i64,
}

/// A signed quantity change against a (tid, variant) card entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDelta {
    pub tid: String,
    #[serde(default)]
    pub variant: String,
    pub quantity: i64,
}

/// A signed quantity change against a pack entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackDelta {
    pub tid: String,
    pub quantity: i64,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InventoryError {
    /// A non-positive delta targeted an entry the user does not hold.
    /// The caller's "has enough" check should have rejected the request.
    #[error("cannot remove {tid}/{variant}: not owned")]
    RemoveMissing { tid: String, variant: String },
}

/// Apply card deltas in order. Entries whose quantity drops to zero or
/// below are removed; new entries are appended for positive deltas.
/// Does not persist anything.
pub fn apply_card_deltas(
    cards: &mut Vec<OwnedCard>,
    deltas: &[CardDelta],
) -> Result<(), InventoryError> {
    let mut index: HashMap<(String, String), usize> = cards
        .iter()
        .enumerate()
        .map(|(i, c)| ((c.tid.clone(), c.variant.clone()), i))
        .collect();

    for delta in deltas {
        let key = (delta.tid.clone(), delta.variant.clone());
        match index.get(&key) {
            Some(&i) => cards[i].quantity += delta.quantity,
            None if delta.quantity > 0 => {
                index.insert(key, cards.len());
                cards.push(OwnedCard {
                    tid: delta.tid.clone(),
                    variant: delta.variant.clone(),
                    quantity: delta.quantity,
                });
            }
            None => {
                return Err(InventoryError::RemoveMissing {
                    tid: delta.tid.clone(),
                    variant: delta.variant.clone(),
                });
            }
        }
    }

    cards.retain(|c| c.quantity > 0);
    Ok(())
}

/// Apply pack deltas in order; same collapse rules as cards, keyed by tid.
pub fn apply_pack_deltas(
    packs: &mut Vec<OwnedPack>,
    deltas: &[PackDelta],
) -> Result<(), InventoryError> {
    let mut index: HashMap<String, usize> = packs
        .iter()
        .enumerate()
        .map(|(i, p)| (p.tid.clone(), i))
        .collect();

    for delta in deltas {
        match index.get(&delta.tid) {
            Some(&i) => packs[i].quantity += delta.quantity,
            None if delta.quantity > 0 => {
                index.insert(delta.tid.clone(), packs.len());
                packs.push(OwnedPack {
                    tid: delta.tid.clone(),
                    quantity: delta.quantity,
                });
            }
            None => {
                return Err(InventoryError::RemoveMissing {
                    tid: delta.tid.clone(),
                    variant: String::new(),
                });
            }
        }
    }

    packs.retain(|p| p.quantity > 0);
    Ok(())
}

/// Owned quantity of a (tid, variant) card pair.
pub fn card_count(cards: &[OwnedCard], tid: &str, variant: &str) -> i64 {
    cards
        .iter()
        .find(|c| c.tid == tid && c.variant == variant)
        .map_or(0, |c| c.quantity)
}

/// Owned quantity of a pack.
pub fn pack_count(packs: &[OwnedPack], tid: &str) -> i64 {
    packs
        .iter()
        .find(|p| p.tid == tid)
        .map_or(0, |p| p.quantity)
}

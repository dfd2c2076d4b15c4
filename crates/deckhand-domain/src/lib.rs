//! Domain types and pure rules for the Deckhand game service.
//!
//! This crate contains only plain types and side-effect-free functions.
//! Import in `usecase/` and `domain/` layers; never in `infra/` or `handlers/`.

pub mod deck;
pub mod inventory;
pub mod market;
pub mod permission;
pub mod pricing;
pub mod wallet;

//! sea-orm entities for the game service tables.

pub mod activities;
pub mod cards;
pub mod packs;
pub mod users;
pub mod variants;
pub mod wallet_connections;

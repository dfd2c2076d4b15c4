//! Identity types shared between the gateway and Deckhand services.

pub mod identity;

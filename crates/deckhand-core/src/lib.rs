//! Shared plumbing for Deckhand services: health endpoints and tracing setup.

pub mod health;
pub mod tracing;

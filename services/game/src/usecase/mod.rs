pub mod card;
pub mod cosmetic;
pub mod deck;
pub mod maintenance;
pub mod pack;
pub mod wallet;

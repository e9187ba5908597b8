//! Core engine types: card ids, players, RNG, configuration, errors.
//!
//! These are the building blocks every other module depends on.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use entity::{CardId, CARDS_PER_PLAYER};
pub use player::{PlayerId, PlayerMap, MAX_PLAYERS, PLAYER_NAMES};
pub use rng::{GameRng, RandomSource};
pub use config::{GameConfig, DEFAULT_MAX_TICKS};
pub use error::BlitzError;

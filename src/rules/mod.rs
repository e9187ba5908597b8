//! Game rules: which visible cards are legal, where they go, and how a
//! game can end.
//!
//! The game loop calls into these functions but never re-derives legality
//! itself.

pub mod engine;

pub use engine::{is_legal, legal_cards, placement, GameResult, Placement};

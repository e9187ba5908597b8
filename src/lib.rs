//! # blitz-sim
//!
//! A simulator for a Dutch Blitz style card race.
//!
//! ## Rules in Brief
//!
//! 1. **Private piles**: every player holds a stock, a reserve, a waste pile
//!    and three open candidate slots.
//!
//! 2. **Shared piles**: rank-1 cards start community piles; any player may
//!    extend a pile with the next rank of the same suit.
//!
//! 3. **Race**: the first player to empty their stock wins.
//!
//! ## Architecture
//!
//! - **Injected randomness**: shuffles and tie-breaks go through a
//!   `RandomSource`, so tests can script a whole game.
//!
//! - **Card identity**: every card carries a unique `CardId`; piles match
//!   cards by id, never by value.
//!
//! - **One-way observers**: the game reports events to a `GameObserver`
//!   that cannot touch game state.
//!
//! ## Modules
//!
//! - `core`: card and player ids, RNG, configuration, errors
//! - `cards`: suits, ranks, cards and decks
//! - `zones`: per-player piles and community piles
//! - `rules`: legal moves, placement, game results
//! - `events`: game events and observers
//! - `games`: the Blitz game loop
//!
//! ```
//! use blitz_sim::{BlitzGame, EventLog, GameConfig, GameRng};
//!
//! let config = GameConfig::new(3).with_seed(1);
//! let mut game = BlitzGame::with_parts(config, GameRng::new(1), EventLog::new()).unwrap();
//! let result = game.run().unwrap();
//! println!("{result}\n{game}");
//! ```

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod events;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    BlitzError, CardId, GameConfig, GameRng, PlayerId, PlayerMap, RandomSource,
};

pub use crate::cards::{Card, Rank, Suit};

pub use crate::zones::{CommunityPile, PlayerPiles};

pub use crate::rules::{GameResult, Placement};

pub use crate::events::{EventLog, GameEvent, GameObserver, PlayTally, TracingObserver};

pub use crate::games::blitz::{BlitzGame, GameStatus};

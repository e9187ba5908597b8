//! Event notifications for logging and reporting.
//!
//! The game loop reports what happens through a [`GameObserver`]:
//!
//! - [`GameEvent::CardPlayed`] after every placement
//! - [`GameEvent::ReserveRotated`] when a player has no legal card
//! - [`GameEvent::GameFinished`] once, at the end
//!
//! Observers are pure sinks. They get `&GameEvent` and nothing else, so
//! they cannot affect simulation state or ordering.
//!
//! ## Bundled Observers
//!
//! - [`TracingObserver`]: structured `tracing` output (the default)
//! - [`EventLog`]: keeps every event, handy in tests
//! - [`PlayTally`]: per-player counters for an end-of-game summary
//! - `()`: discards everything
//! - `(A, B)`: forwards to both
//!
//! ```
//! use blitz_sim::events::{EventLog, PlayTally};
//! use blitz_sim::games::blitz::BlitzGame;
//! use blitz_sim::core::{GameConfig, GameRng};
//!
//! let config = GameConfig::new(2).with_seed(7);
//! let mut game = BlitzGame::with_parts(config, GameRng::new(7), (EventLog::new(), PlayTally::new())).unwrap();
//! let result = game.run().unwrap();
//!
//! let (log, tally) = game.into_observer();
//! assert!(!log.is_empty());
//! assert_eq!(tally.result(), Some(result));
//! ```

mod event;
mod observer;

pub use event::GameEvent;
pub use observer::{EventLog, GameObserver, PlayTally, PlayerTally, TracingObserver};

//! Crate error type.

use derive_more::Display;

use super::player::PlayerId;
use crate::cards::Card;

/// Errors raised by configuration and by broken pile bookkeeping.
///
/// `UnplayableCard` and `InvalidState` mean an internal invariant was
/// violated. They abort the simulation and are never retried.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BlitzError {
    /// A player was asked to give up a card it cannot play.
    #[display("Cannot play {card}: not among the playable piles [{visible}]")]
    UnplayableCard {
        /// The offending card.
        card: Card,
        /// The player's visible cards at the time.
        visible: String,
    },

    /// A candidate slot needed a refill but the stock was already empty.
    #[display("Invalid state: {player} has an empty stock while refilling a candidate slot")]
    InvalidState {
        /// Player whose piles are inconsistent.
        player: PlayerId,
    },

    /// The name pool cannot seat this many players.
    #[display("Player count {requested} is outside 1..={max}")]
    PlayerCount {
        /// Count asked for.
        requested: usize,
        /// Largest supported count.
        max: usize,
    },

    /// A configuration value could not be parsed.
    #[display("Invalid value {value:?} for {key}")]
    InvalidSetting {
        /// Setting name.
        key: &'static str,
        /// Raw value as given.
        value: String,
    },
}

impl std::error::Error for BlitzError {}

/// Join cards for diagnostics: `Red 3<Plow>, Blue 1<Plow>`.
pub(crate) fn describe_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

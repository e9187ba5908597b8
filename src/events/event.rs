//! Game events.
//!
//! Events are emitted by the game loop after each state change. They are
//! snapshots: an observer holding one learns nothing about later state and
//! cannot change the game through it.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::PlayerId;
use crate::rules::GameResult;
use crate::zones::VisibleCards;

/// Something that happened during a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A player placed a card on a community pile.
    CardPlayed {
        /// Tick the play happened in (starting at 1).
        tick: u64,
        /// Who played.
        player: PlayerId,
        /// The player's visible cards before the play.
        visible: VisibleCards,
        /// The legal subset of `visible`.
        legal: VisibleCards,
        /// The card that was played.
        chosen: Card,
        /// Index of the pile the card landed on.
        pile: usize,
        /// Top card of every pile after the play, in pile order. A top card
        /// fixes its pile's suit and height.
        pile_tops: Vec<Card>,
    },

    /// A player had no legal card and drew from reserve.
    ReserveRotated {
        tick: u64,
        player: PlayerId,
        /// New waste top, `None` if the player had nothing left to draw.
        waste_top: Option<Card>,
        /// Cards left in reserve after the draw.
        reserve_left: usize,
    },

    /// The game ended.
    GameFinished {
        tick: u64,
        result: GameResult,
    },
}

impl GameEvent {
    /// Tick the event belongs to.
    #[must_use]
    pub fn tick(&self) -> u64 {
        match self {
            GameEvent::CardPlayed { tick, .. }
            | GameEvent::ReserveRotated { tick, .. }
            | GameEvent::GameFinished { tick, .. } => *tick,
        }
    }

    /// Player the event is about, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            GameEvent::CardPlayed { player, .. } | GameEvent::ReserveRotated { player, .. } => {
                Some(*player)
            }
            GameEvent::GameFinished { .. } => None,
        }
    }
}

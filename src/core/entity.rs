//! Card identity.
//!
//! Every card dealt in a game gets a unique `CardId`. Two cards with the same
//! suit, rank and owner are still different cards; all pile bookkeeping
//! compares ids, never card values.
//!
//! ## ID Layout
//!
//! Each player owns a contiguous block of [`CARDS_PER_PLAYER`] ids:
//! - `0..40`: first player
//! - `40..80`: second player
//! - and so on
//!
//! ```
//! use blitz_sim::core::{CardId, PlayerId};
//!
//! let first = CardId::first_for(PlayerId::new(1));
//! assert_eq!(first, CardId(40));
//! assert_eq!(first.owner_index(), 1);
//! ```

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Cards dealt to every player: 4 suits x 10 ranks.
pub const CARDS_PER_PLAYER: usize = 40;

/// Unique identifier for a card within one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u16);

impl CardId {
    /// First id in a player's block.
    #[must_use]
    pub const fn first_for(player: PlayerId) -> Self {
        Self((player.index() * CARDS_PER_PLAYER) as u16)
    }

    /// Index of the player whose block this id falls in.
    #[must_use]
    pub const fn owner_index(self) -> usize {
        self.0 as usize / CARDS_PER_PLAYER
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// The id following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

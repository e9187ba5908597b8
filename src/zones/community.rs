//! Shared community piles.
//!
//! A pile is started by a rank-1 card and grows one rank at a time in a
//! single suit, so its top rank always equals its length. Several piles of
//! the same suit can exist at once.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// A single community pile, bottom card first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityPile {
    cards: Vec<Card>,
}

impl CommunityPile {
    /// Start a pile. Returns `None` unless `card` is rank 1.
    #[must_use]
    pub fn start(card: Card) -> Option<Self> {
        card.starts_pile().then(|| Self { cards: vec![card] })
    }

    /// True if `card` extends this pile.
    #[must_use]
    pub fn accepts(&self, card: &Card) -> bool {
        card.can_play_onto(self.top())
    }

    /// Place `card` on top. Returns `false` (and leaves the pile alone) if
    /// the card does not extend it.
    pub fn push(&mut self, card: Card) -> bool {
        if self.accepts(&card) {
            self.cards.push(card);
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards from bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl std::fmt::Display for CommunityPile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.cards.first(), self.top()) {
            (Some(bottom), Some(top)) => write!(
                f,
                "{} 1..{} ({} cards, top {})",
                bottom.suit,
                top.rank,
                self.cards.len(),
                top
            ),
            _ => f.write_str("(empty)"),
        }
    }
}

//! Card values.
//!
//! A `Card` is an immutable record: who dealt it, its suit, its rank, and
//! the `CardId` that makes it unique. Cards are created once at the deal
//! and only ever move between piles afterwards.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::core::entity::{CardId, CARDS_PER_PLAYER};
use crate::core::player::PlayerId;

/// The four suits, in deal order.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Suit {
    /// All suits in deal order.
    pub const ALL: [Suit; 4] = [Suit::Red, Suit::Blue, Suit::Green, Suit::Yellow];
}

/// Card rank, 1 through 10.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[display("{_0}")]
pub struct Rank(u8);

impl Rank {
    /// Lowest rank. Only these can start a community pile.
    pub const ONE: Rank = Rank(1);

    /// Highest rank.
    pub const MAX: Rank = Rank(10);

    /// Create a rank, or `None` outside 1..=10.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::ONE.0 && value <= Self::MAX.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the raw value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Every rank from 1 to 10.
    pub fn all() -> impl Iterator<Item = Rank> {
        (Self::ONE.0..=Self::MAX.0).map(Rank)
    }
}

/// A single card.
///
/// Equality includes the id, so two separately dealt cards never compare
/// equal even when suit, rank and owner match.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[display("{suit} {rank}<{owner}>")]
pub struct Card {
    /// Unique id for this card.
    pub id: CardId,
    /// Player who was dealt the card.
    pub owner: PlayerId,
    /// Suit.
    pub suit: Suit,
    /// Rank.
    pub rank: Rank,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(id: CardId, owner: PlayerId, suit: Suit, rank: Rank) -> Self {
        Self { id, owner, suit, rank }
    }

    /// Rank-1 cards may always start a new community pile.
    #[must_use]
    pub fn starts_pile(&self) -> bool {
        self.rank == Rank::ONE
    }

    /// True if this card extends `target`: same suit, rank one higher.
    ///
    /// A rank-1 card never extends anything.
    ///
    /// ```
    /// use blitz_sim::cards::{Card, Rank, Suit};
    /// use blitz_sim::core::{CardId, PlayerId};
    ///
    /// let p = PlayerId::new(0);
    /// let two = Card::new(CardId(0), p, Suit::Red, Rank::new(2).unwrap());
    /// let three = Card::new(CardId(1), p, Suit::Red, Rank::new(3).unwrap());
    ///
    /// assert!(three.can_play_onto(Some(&two)));
    /// assert!(!two.can_play_onto(Some(&three)));
    /// assert!(!three.can_play_onto(None));
    /// ```
    #[must_use]
    pub fn can_play_onto(&self, target: Option<&Card>) -> bool {
        target.is_some_and(|target| {
            target.suit == self.suit && target.rank.value() + 1 == self.rank.value()
        })
    }
}

/// Build the 40 cards dealt to `owner`, suit by suit, rank 1 to 10.
///
/// Ids run contiguously from the owner's first id.
#[must_use]
pub fn player_deck(owner: PlayerId) -> Vec<Card> {
    let mut id = CardId::first_for(owner);
    let mut cards = Vec::with_capacity(CARDS_PER_PLAYER);

    for suit in Suit::ALL {
        for rank in Rank::all() {
            cards.push(Card::new(id, owner, suit, rank));
            id = id.next();
        }
    }

    cards
}

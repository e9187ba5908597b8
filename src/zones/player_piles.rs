//! One player's private piles.
//!
//! Every card a player still holds sits in exactly one of four places:
//!
//! | Zone       | Shape                 | Visible        |
//! |------------|-----------------------|----------------|
//! | stock      | stack of 10 at deal   | top only       |
//! | reserve    | stack of 27 at deal   | no             |
//! | waste      | stack, drawn in 3s    | top only       |
//! | candidates | 3 slots               | all            |
//!
//! Stacks are `Vec`s with the top at the end. The player wins the moment the
//! stock empties.

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::cards::{player_deck, Card};
use crate::core::error::describe_cards;
use crate::core::{BlitzError, PlayerId, RandomSource};

/// Open candidate slots per player.
pub const CANDIDATE_SLOTS: usize = 3;

/// Cards dealt face down into the stock.
pub const STOCK_SIZE: usize = 10;

/// Cards moved from reserve to waste per rotation.
pub const ROTATE_COUNT: usize = 3;

/// Waste top, stock top, and the three candidates.
pub type VisibleCards = SmallVec<[Card; 5]>;

/// A player's stock, reserve, waste and candidate slots.
///
/// The containers are private. Callers change them only through
/// [`rotate_reserve`](Self::rotate_reserve) and
/// [`play_card`](Self::play_card).
#[derive(Clone, Debug)]
pub struct PlayerPiles {
    owner: PlayerId,
    stock: Vec<Card>,
    reserve: Vec<Card>,
    waste: Vec<Card>,
    candidates: [Option<Card>; CANDIDATE_SLOTS],
}

impl PlayerPiles {
    /// Shuffle `owner`'s 40 cards and deal them out.
    ///
    /// The first three shuffled cards fill the candidate slots, the next ten
    /// form the stock (fourth card on top), and the last 27 form the
    /// reserve (fourteenth card on top).
    pub fn deal(owner: PlayerId, rng: &mut impl RandomSource) -> Self {
        let mut cards = player_deck(owner);
        rng.shuffle(&mut cards);
        Self::from_shuffled(owner, cards)
    }

    fn from_shuffled(owner: PlayerId, cards: Vec<Card>) -> Self {
        let mut dealt = cards.into_iter();

        let mut candidates = [None; CANDIDATE_SLOTS];
        for slot in &mut candidates {
            *slot = dealt.next();
        }

        let mut stock: Vec<Card> = dealt.by_ref().take(STOCK_SIZE).collect();
        stock.reverse();

        let mut reserve: Vec<Card> = dealt.collect();
        reserve.reverse();

        Self {
            owner,
            stock,
            reserve,
            waste: Vec::new(),
            candidates,
        }
    }

    /// Draw up to three cards from reserve onto waste, one at a time, so the
    /// last card drawn ends on top.
    ///
    /// An empty reserve is rebuilt from the waste pile first: the card drawn
    /// earliest becomes the new reserve top. With both piles empty this does
    /// nothing.
    pub fn rotate_reserve(&mut self) {
        if self.reserve.is_empty() {
            if self.waste.is_empty() {
                trace!(player = %self.owner, "nothing left to draw");
                return;
            }

            debug!(player = %self.owner, cards = self.waste.len(), "recycling waste into reserve");
            self.waste.reverse();
            std::mem::swap(&mut self.reserve, &mut self.waste);
        }

        for _ in 0..ROTATE_COUNT {
            match self.reserve.pop() {
                Some(card) => self.waste.push(card),
                None => break,
            }
        }
    }

    /// The playable cards: waste top, stock top, then each occupied
    /// candidate slot, always in that order.
    #[must_use]
    pub fn visible_cards(&self) -> VisibleCards {
        self.waste
            .last()
            .into_iter()
            .chain(self.stock.last())
            .chain(self.candidates.iter().flatten())
            .copied()
            .collect()
    }

    /// Remove `card` from wherever it is playable.
    ///
    /// Returns `Ok(true)` when the stock is now empty, which wins the game.
    /// A candidate slot is refilled from the top of the stock.
    pub fn play_card(&mut self, card: Card) -> Result<bool, BlitzError> {
        if self.waste.last().is_some_and(|top| top.id == card.id) {
            self.waste.pop();
            return Ok(self.stock.is_empty());
        }

        if self.stock.last().is_some_and(|top| top.id == card.id) {
            self.stock.pop();
            return Ok(self.stock.is_empty());
        }

        let slot = self
            .candidates
            .iter()
            .position(|slot| slot.is_some_and(|held| held.id == card.id));

        match slot {
            Some(slot) => {
                let refill = self
                    .stock
                    .pop()
                    .ok_or(BlitzError::InvalidState { player: self.owner })?;
                self.candidates[slot] = Some(refill);
                Ok(self.stock.is_empty())
            }
            None => Err(BlitzError::UnplayableCard {
                card,
                visible: describe_cards(&self.visible_cards()),
            }),
        }
    }

    /// Player these piles belong to.
    #[must_use]
    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    #[must_use]
    pub fn stock_len(&self) -> usize {
        self.stock.len()
    }

    #[must_use]
    pub fn reserve_len(&self) -> usize {
        self.reserve.len()
    }

    #[must_use]
    pub fn waste_len(&self) -> usize {
        self.waste.len()
    }

    /// Occupied candidate slots.
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.iter().flatten().count()
    }

    #[must_use]
    pub fn stock_top(&self) -> Option<&Card> {
        self.stock.last()
    }

    #[must_use]
    pub fn waste_top(&self) -> Option<&Card> {
        self.waste.last()
    }

    /// The three candidate slots.
    #[must_use]
    pub fn candidates(&self) -> &[Option<Card>; CANDIDATE_SLOTS] {
        &self.candidates
    }

    /// Cards still held across all four zones.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.stock.len() + self.reserve.len() + self.waste.len() + self.candidate_count()
    }

    /// Every held card, in no particular order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.stock
            .iter()
            .chain(&self.reserve)
            .chain(&self.waste)
            .chain(self.candidates.iter().flatten())
    }
}

impl std::fmt::Display for PlayerPiles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: stock {} (top {}), reserve {}, waste {} (top {}), candidates [",
            self.owner,
            self.stock.len(),
            DisplayTop(self.stock_top()),
            self.reserve.len(),
            self.waste.len(),
            DisplayTop(self.waste_top()),
        )?;

        for (i, slot) in self.candidates.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", DisplayTop(slot.as_ref()))?;
        }

        f.write_str("]")
    }
}

struct DisplayTop<'a>(Option<&'a Card>);

impl std::fmt::Display for DisplayTop<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(card) => write!(f, "{card}"),
            None => f.write_str("-"),
        }
    }
}

//! Move legality and game results.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::PlayerId;
use crate::zones::{CommunityPile, VisibleCards};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// This player emptied their stock.
    Winner(PlayerId),
    /// The tick ceiling was reached with no winner.
    Stalemate,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// The winner, if there is one.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Stalemate => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(p) => write!(f, "{p} wins"),
            GameResult::Stalemate => f.write_str("stalemate"),
        }
    }
}

/// Where a legal card goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// Start a new pile (rank-1 cards).
    NewPile,
    /// Extend the pile at this index.
    Onto(usize),
}

/// A card is legal if it starts a pile or extends the top of any pile.
#[must_use]
pub fn is_legal(card: &Card, piles: &[CommunityPile]) -> bool {
    card.starts_pile() || piles.iter().any(|pile| pile.accepts(card))
}

/// Filter `visible` down to the legal set, keeping visible order.
#[must_use]
pub fn legal_cards(visible: &[Card], piles: &[CommunityPile]) -> VisibleCards {
    visible
        .iter()
        .filter(|card| is_legal(card, piles))
        .copied()
        .collect()
}

/// Pick the destination for `card`: a new pile for rank 1, otherwise the
/// first pile (in creation order) it extends.
#[must_use]
pub fn placement(card: &Card, piles: &[CommunityPile]) -> Option<Placement> {
    if card.starts_pile() {
        return Some(Placement::NewPile);
    }

    piles
        .iter()
        .position(|pile| pile.accepts(card))
        .map(Placement::Onto)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};
    use crate::core::CardId;

    fn card(id: u16, suit: Suit, rank: u8) -> Card {
        Card::new(CardId(id), PlayerId::new(0), suit, Rank::new(rank).unwrap())
    }

    fn pile(id: u16, suit: Suit, height: u8) -> CommunityPile {
        let mut pile = CommunityPile::start(card(id, suit, 1)).unwrap();
        for rank in 2..=height {
            assert!(pile.push(card(id + rank as u16, suit, rank)));
        }
        pile
    }

    #[test]
    fn test_game_result() {
        let result = GameResult::Winner(PlayerId::new(1));
        assert!(!result.is_winner(PlayerId::new(0)));
        assert!(result.is_winner(PlayerId::new(1)));
        assert_eq!(result.winner(), Some(PlayerId::new(1)));
        assert_eq!(result.to_string(), "Bucket wins");

        let stalemate = GameResult::Stalemate;
        assert!(!stalemate.is_winner(PlayerId::new(0)));
        assert_eq!(stalemate.winner(), None);
    }

    #[test]
    fn test_rank_one_always_legal() {
        assert!(is_legal(&card(0, Suit::Red, 1), &[]));
        assert!(!is_legal(&card(1, Suit::Red, 2), &[]));
    }

    #[test]
    fn test_legal_cards_keep_visible_order() {
        let piles = vec![pile(100, Suit::Red, 3), pile(200, Suit::Blue, 1)];
        let visible = vec![
            card(0, Suit::Blue, 2),
            card(1, Suit::Green, 5),
            card(2, Suit::Yellow, 1),
            card(3, Suit::Red, 4),
            card(4, Suit::Red, 5),
        ];

        let legal = legal_cards(&visible, &piles);
        let ids: Vec<u16> = legal.iter().map(|c| c.id.raw()).collect();
        assert_eq!(ids, vec![0, 2, 3]);
    }

    #[test]
    fn test_placement() {
        let piles = vec![pile(100, Suit::Green, 2), pile(200, Suit::Red, 2), pile(300, Suit::Red, 4)];

        assert_eq!(placement(&card(0, Suit::Red, 1), &piles), Some(Placement::NewPile));
        assert_eq!(placement(&card(1, Suit::Red, 3), &piles), Some(Placement::Onto(1)));
        assert_eq!(placement(&card(2, Suit::Red, 5), &piles), Some(Placement::Onto(2)));
        assert_eq!(placement(&card(3, Suit::Blue, 2), &piles), None);
    }

    #[test]
    fn test_placement_prefers_oldest_matching_pile() {
        let piles = vec![pile(100, Suit::Yellow, 3), pile(200, Suit::Yellow, 3)];
        assert_eq!(placement(&card(0, Suit::Yellow, 4), &piles), Some(Placement::Onto(0)));
    }
}

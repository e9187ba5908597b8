//! Cards: suits, ranks and the per-player deck.
//!
//! Cards carry a `CardId` so identical-looking cards stay distinguishable.
//! The only rule a card knows is [`Card::can_play_onto`]; starting a new
//! pile with a rank-1 card is a game rule (see `rules`).

mod card;

pub use card::{player_deck, Card, Rank, Suit};

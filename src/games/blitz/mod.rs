//! Blitz: race to empty your stock pile.
//!
//! - Each player is dealt 40 cards: 3 open candidates, a 10-card stock and
//!   a 27-card reserve
//! - Every tick, each player in turn plays one legal card onto a community
//!   pile, or draws three from reserve if nothing is legal
//! - Rank-1 cards start new piles; other cards extend a pile of their suit
//!   by exactly one rank
//! - The first player to empty their stock wins
//!
//! Supports 1-4 players.

mod game;

pub use game::{BlitzGame, GameStatus};

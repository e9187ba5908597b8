//! Where cards live.
//!
//! - [`PlayerPiles`]: one player's stock, reserve, waste and candidate slots
//! - [`CommunityPile`]: a shared ascending pile any player may extend

mod community;
mod player_piles;

pub use community::CommunityPile;
pub use player_piles::{PlayerPiles, VisibleCards, CANDIDATE_SLOTS, ROTATE_COUNT, STOCK_SIZE};

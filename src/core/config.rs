//! Game configuration.
//!
//! A game is configured once at startup with:
//! - the player count (1 to [`MAX_PLAYERS`], bounded by the name pool)
//! - an optional tick ceiling, after which the game ends in a stalemate
//! - an optional RNG seed (entropy-seeded when absent)
//!
//! Configs are built in code or read from the environment with
//! [`GameConfig::from_env`].

use serde::{Deserialize, Serialize};

use super::error::BlitzError;
use super::player::MAX_PLAYERS;

/// Ticks allowed before a game is called a stalemate.
pub const DEFAULT_MAX_TICKS: u64 = 10_000;

/// Environment variable holding the player count.
pub const ENV_PLAYERS: &str = "BLITZ_PLAYERS";
/// Environment variable holding the tick ceiling (`none` or `0` for unbounded).
pub const ENV_MAX_TICKS: &str = "BLITZ_MAX_TICKS";
/// Environment variable holding the RNG seed.
pub const ENV_SEED: &str = "BLITZ_SEED";

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of players (1 to 4).
    pub player_count: usize,

    /// Tick ceiling. `None` lets the game loop until someone wins.
    pub max_ticks: Option<u64>,

    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: MAX_PLAYERS,
            max_ticks: Some(DEFAULT_MAX_TICKS),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a configuration for `player_count` players.
    ///
    /// The count is checked by [`GameConfig::validate`], which every game
    /// constructor calls.
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    /// Set the tick ceiling.
    #[must_use]
    pub fn with_max_ticks(mut self, max_ticks: u64) -> Self {
        self.max_ticks = Some(max_ticks);
        self
    }

    /// Remove the tick ceiling.
    #[must_use]
    pub fn unbounded(mut self) -> Self {
        self.max_ticks = None;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject player counts the name pool cannot seat.
    pub fn validate(&self) -> Result<(), BlitzError> {
        if (1..=MAX_PLAYERS).contains(&self.player_count) {
            Ok(())
        } else {
            Err(BlitzError::PlayerCount {
                requested: self.player_count,
                max: MAX_PLAYERS,
            })
        }
    }

    /// Read `BLITZ_PLAYERS`, `BLITZ_MAX_TICKS` and `BLITZ_SEED`.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, BlitzError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. `from_env` uses the process
    /// environment; tests pass a closure.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, BlitzError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_PLAYERS) {
            config.player_count = parse_setting(ENV_PLAYERS, &raw)?;
        }

        if let Some(raw) = lookup(ENV_MAX_TICKS) {
            let trimmed = raw.trim();
            config.max_ticks = if trimmed.eq_ignore_ascii_case("none") {
                None
            } else {
                match parse_setting::<u64>(ENV_MAX_TICKS, trimmed)? {
                    0 => None,
                    ticks => Some(ticks),
                }
            };
        }

        if let Some(raw) = lookup(ENV_SEED) {
            config.seed = Some(parse_setting(ENV_SEED, &raw)?);
        }

        config.validate()?;
        Ok(config)
    }
}

fn parse_setting<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, BlitzError> {
    raw.trim().parse().map_err(|_| BlitzError::InvalidSetting {
        key,
        value: raw.to_string(),
    })
}

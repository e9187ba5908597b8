//! Run one Blitz simulation and print the final table.
//!
//! Configured through the environment:
//! - `BLITZ_PLAYERS`: 1-4 (default 4)
//! - `BLITZ_MAX_TICKS`: tick ceiling, `none` for unbounded (default 10000)
//! - `BLITZ_SEED`: RNG seed (default: random)
//! - `RUST_LOG`: log filter (default `info`)

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use blitz_sim::{BlitzGame, GameConfig, GameRng, PlayTally, TracingObserver};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = GameConfig::from_env()?;
    let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    info!(seed = rng.seed(), players = config.player_count, max_ticks = ?config.max_ticks, "starting simulation");

    let mut game = BlitzGame::with_parts(config, rng, (TracingObserver, PlayTally::new()))?;
    let result = game.run()?;

    println!("Game finished! {result}");
    println!("{game}");
    println!("{}", game.observer().1);

    Ok(())
}

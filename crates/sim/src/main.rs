//! Headless battle simulator.
//!
//! Loads content from a data directory, builds the configured encounter and
//! drives it frame by frame. Every party member auto-acts, enemies use the
//! default decision policy, and the event stream is printed to stdout.
//!
//! ```bash
//! BATTLE_SIM_SEED=7 RUST_LOG=battle_core=debug cargo run -p battle-sim
//! ```
mod config;
mod logging;
mod runner;

use anyhow::Result;

use crate::config::SimConfig;
use crate::runner::{EventPrinter, Outcome, Simulation};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = SimConfig::from_env();
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    tracing::info!(data_dir = %config.data_dir.display(), fps = config.fps, "starting simulation");

    let mut simulation = Simulation::load(&config)?;
    let mut printer = EventPrinter::new(simulation.battle());
    let outcome = simulation.run(&mut printer);

    match &outcome {
        Outcome::Victory(rewards) => tracing::info!(
            xp = rewards.xp,
            credits = rewards.credits,
            clock = simulation.battle().clock(),
            "party won"
        ),
        Outcome::Defeat => tracing::info!(clock = simulation.battle().clock(), "party fell"),
        Outcome::TimedOut => tracing::warn!(
            limit = config.max_seconds,
            "battle still undecided at the time limit"
        ),
    }

    Ok(())
}

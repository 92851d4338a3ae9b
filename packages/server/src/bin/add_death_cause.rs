//! Adds `death_cause` to `game_runs`.

use leaderboard_core::migrations::DeathCauseMigration;
use leaderboard_core::{logging, scripts};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();
    scripts::run_additive(&DeathCauseMigration).await
}

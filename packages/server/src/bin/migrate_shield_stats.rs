//! Adds the `damage_blocked` breakdown columns to `game_runs`.

use leaderboard_core::migrations::ShieldStatsMigration;
use leaderboard_core::{logging, scripts};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();
    scripts::run_additive(&ShieldStatsMigration).await
}

//! Adds `radar_counts` and `snitches_caught` to `game_runs`.

use leaderboard_core::migrations::RadarAndSnitchesMigration;
use leaderboard_core::{logging, scripts};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();
    scripts::run_additive(&RadarAndSnitchesMigration).await
}

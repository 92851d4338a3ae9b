//! Deletes every row of `game_runs` after the operator types the
//! confirmation phrase on stdin.

use leaderboard_core::{logging, scripts};
use std::io;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout();
    scripts::run_clear(&mut stdin, &mut stdout).await
}

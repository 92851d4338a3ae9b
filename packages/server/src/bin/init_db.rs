//! Creates the leaderboard tables and indexes on a fresh database.
//!
//! Safe to run against an existing database: every statement is
//! `IF NOT EXISTS`.

use leaderboard_core::migrations::InitSchemaMigration;
use leaderboard_core::{logging, scripts};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();
    scripts::run_additive(&InitSchemaMigration).await
}

//! Bodies of the standalone programs in `src/bin`.
//!
//! Additive scripts exit 1 on any failure. The clear script exits 0 once it
//! has a valid configuration, whether the wipe ran, failed, or was cancelled.

use std::io::{BufRead, Write};
use std::process::ExitCode;

use crate::config::Config;
use crate::db;
use crate::error::Result;
use crate::leaderboard::{clear_game_runs, read_confirmation};
use crate::migrations::SchemaMigration;
use crate::runner::{MigrationReport, MigrationRunner};
use crate::status;

/// Load configuration, connect, and apply one migration
pub async fn apply_from_env(migration: &dyn SchemaMigration) -> Result<MigrationReport> {
    let config = Config::from_env()?;
    let pool = db::connect(&config).await?;

    let report = MigrationRunner::new(&pool).apply(migration).await;
    pool.close().await;
    report
}

pub async fn run_additive(migration: &dyn SchemaMigration) -> ExitCode {
    status::print_header(&format!("{}...", migration.description()));

    match apply_from_env(migration).await {
        Ok(report) => {
            for step in &report.applied {
                status::print_success(step);
            }
            status::print_success("Migration complete!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(migration = migration.name(), error = %e, "Migration failed");
            status::print_failure(&format!("Migration failed: {}", e));
            ExitCode::FAILURE
        }
    }
}

pub async fn run_clear<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            status::print_failure(&format!("Configuration error: {}", e));
            return ExitCode::FAILURE;
        }
    };

    let confirmed = match read_confirmation(input, output) {
        Ok(confirmed) => confirmed,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read confirmation");
            false
        }
    };

    if !confirmed {
        status::print_cancelled("Wipe cancelled. Confirmation string did not match.");
        return ExitCode::SUCCESS;
    }

    status::print_info("🧹 Clearing all game runs...");

    let result = async {
        let pool = db::connect(&config).await?;
        let rows = clear_game_runs(&pool).await;
        pool.close().await;
        rows
    }
    .await;

    match result {
        Ok(rows) => status::print_success(&format!("Success! Deleted {} records.", rows)),
        Err(e) => {
            tracing::error!(error = %e, "Failed to clear leaderboard");
            status::print_failure(&format!("Failed to clear leaderboard: {}", e));
        }
    }

    ExitCode::SUCCESS
}

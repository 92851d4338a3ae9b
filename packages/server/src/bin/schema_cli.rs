//! CLI for listing, applying and verifying schema migrations
//!
//! Prints one JSON object per invocation on stdout so the result can be
//! parsed by deploy tooling, errors included. The exit code is 0 exactly
//! when `success` is true. Logs go to stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use leaderboard_core::config::Config;
use leaderboard_core::migrations::{all_migrations, find_migration, MigrationEntry};
use leaderboard_core::runner::{MigrationReport, MigrationRunner};
use leaderboard_core::verify::{verify_migration, VerifyResult};
use leaderboard_core::{db, logging, SchemaError};
use serde::Serialize;
use sqlx::PgPool;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "schema_cli")]
#[command(about = "Leaderboard schema migration CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all registered migrations
    List,

    /// Apply a single migration
    Apply { name: String },

    /// Apply every registered migration in order
    ApplyAll,

    /// Check that a migration's tables, columns and indexes exist
    Verify { name: String },
}

// ============================================================================
// JSON Response Types
// ============================================================================

#[derive(Serialize, Default)]
struct Response {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    migrations: Option<Vec<MigrationInfo>>,
    /// Migrations applied by this invocation, kept when a later one fails
    #[serde(skip_serializing_if = "Option::is_none")]
    reports: Option<Vec<MigrationReport>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    verify: Option<VerifyResult>,
}

impl Response {
    fn failure(err: &anyhow::Error) -> Self {
        Self {
            success: false,
            message: Some(format!("{:#}", err)),
            ..Default::default()
        }
    }
}

#[derive(Serialize)]
struct MigrationInfo {
    name: String,
    description: Option<String>,
    steps: usize,
}

fn output(resp: &Response) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string(resp)?);
    Ok(())
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();

    let mut reports = Vec::new();
    let result = match cli.command {
        Commands::List => Ok(cmd_list()),
        Commands::Apply { name } => cmd_apply(&name, &mut reports).await,
        Commands::ApplyAll => cmd_apply_all(&mut reports).await,
        Commands::Verify { name } => cmd_verify(&name).await,
    };

    let mut resp = match result {
        Ok(resp) => resp,
        Err(e) => {
            let resp = Response::failure(&e);
            tracing::error!(error = resp.message.as_deref(), "Command failed");
            resp
        }
    };
    if !reports.is_empty() {
        resp.reports = Some(reports);
    }

    if let Err(e) = output(&resp) {
        eprintln!("Failed to encode response: {}", e);
        return ExitCode::FAILURE;
    }

    if resp.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn lookup(name: &str) -> Result<MigrationEntry> {
    find_migration(name).ok_or_else(|| SchemaError::UnknownMigration(name.to_string()).into())
}

async fn get_pool() -> Result<PgPool> {
    let config = Config::from_env().context("Failed to load configuration")?;
    db::connect(&config)
        .await
        .context("Failed to connect to database")
}

// ============================================================================
// Commands
// ============================================================================

fn cmd_list() -> Response {
    let migrations: Vec<MigrationInfo> = all_migrations()
        .into_iter()
        .map(|e| MigrationInfo {
            name: e.migration.name().to_string(),
            description: {
                let desc = e.migration.description();
                if desc.is_empty() {
                    None
                } else {
                    Some(desc.to_string())
                }
            },
            steps: e.migration.changes().len(),
        })
        .collect();

    Response {
        success: true,
        migrations: Some(migrations),
        ..Default::default()
    }
}

async fn cmd_apply(name: &str, reports: &mut Vec<MigrationReport>) -> Result<Response> {
    let entry = lookup(name)?;

    let pool = get_pool().await?;
    let report = MigrationRunner::new(&pool)
        .apply(entry.migration.as_ref())
        .await;
    pool.close().await;
    let report = report?;

    let message = format!("Applied {} statements", report.applied.len());
    reports.push(report);

    Ok(Response {
        success: true,
        message: Some(message),
        ..Default::default()
    })
}

async fn cmd_apply_all(reports: &mut Vec<MigrationReport>) -> Result<Response> {
    let pool = get_pool().await?;
    let runner = MigrationRunner::new(&pool);

    let mut failure = None;
    for entry in all_migrations() {
        match runner.apply(entry.migration.as_ref()).await {
            Ok(report) => reports.push(report),
            Err(e) => {
                failure = Some(e);
                break;
            }
        }
    }
    pool.close().await;

    if let Some(e) = failure {
        return Err(e.into());
    }

    Ok(Response {
        success: true,
        message: Some(format!("Applied {} migrations", reports.len())),
        ..Default::default()
    })
}

async fn cmd_verify(name: &str) -> Result<Response> {
    let entry = lookup(name)?;

    let pool = get_pool().await?;
    let result = verify_migration(&pool, entry.migration.as_ref()).await;
    pool.close().await;
    let result = result?;

    let message = match &result {
        VerifyResult::Passed => "Verification passed".to_string(),
        VerifyResult::Incomplete { missing } => format!("{} objects missing", missing.len()),
        VerifyResult::Failed { issues } => issues.join("; "),
    };

    Ok(Response {
        success: result == VerifyResult::Passed,
        message: Some(message),
        verify: Some(result),
        ..Default::default()
    })
}

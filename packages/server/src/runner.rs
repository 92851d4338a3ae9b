//! Ordered execution of schema migrations.
//!
//! Changes run strictly in order and each is awaited before the next is
//! issued. The first failure stops the migration; nothing already applied is
//! rolled back and nothing is retried.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::db::StatementExecutor;
use crate::error::{Result, SchemaError};
use crate::migrations::SchemaMigration;

/// Outcome of a fully applied migration
#[derive(Debug, Clone, Serialize)]
pub struct MigrationReport {
    pub name: String,
    /// Description of each applied change, in execution order
    pub applied: Vec<String>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

pub struct MigrationRunner<'a, E: StatementExecutor + ?Sized> {
    executor: &'a E,
}

impl<'a, E: StatementExecutor + ?Sized> MigrationRunner<'a, E> {
    pub fn new(executor: &'a E) -> Self {
        Self { executor }
    }

    pub async fn apply(&self, migration: &dyn SchemaMigration) -> Result<MigrationReport> {
        let name = migration.name();
        let started_at = Utc::now();
        let mut applied = Vec::new();

        tracing::info!(migration = name, "Starting migration");

        for (index, change) in migration.changes().iter().enumerate() {
            let step = index + 1;
            let sql = change.to_sql();
            let description = change.describe();

            tracing::debug!(migration = name, step, sql = %sql, "Executing statement");

            if let Err(source) = self.executor.execute(&sql).await {
                tracing::error!(migration = name, step, error = %source, "Statement failed");
                return Err(SchemaError::Statement {
                    migration: name.to_string(),
                    step,
                    description,
                    source,
                });
            }

            tracing::info!(migration = name, step, "{}", description);
            applied.push(description);
        }

        tracing::info!(migration = name, steps = applied.len(), "Migration complete");

        Ok(MigrationReport {
            name: name.to_string(),
            applied,
            started_at,
            finished_at: Utc::now(),
        })
    }
}

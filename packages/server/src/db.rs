//! Database connection and the statement-execution seam.

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::Config;
use crate::error::{Result, SchemaError};

/// Executes a single SQL statement and reports affected rows.
///
/// Implemented for `PgPool`; tests substitute a recording fake.
#[async_trait]
pub trait StatementExecutor: Send + Sync {
    async fn execute(&self, sql: &str) -> Result<u64, sqlx::Error>;
}

#[async_trait]
impl StatementExecutor for PgPool {
    async fn execute(&self, sql: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(sql).execute(self).await?;
        Ok(result.rows_affected())
    }
}

/// Open a single-connection pool. Statements run one at a time, so more
/// connections would never be used.
pub async fn connect(config: &Config) -> Result<PgPool> {
    let options = config.connect_options()?;

    tracing::info!(
        host = options.get_host(),
        port = options.get_port(),
        database = options.get_database().unwrap_or_default(),
        "Connecting to database"
    );

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(config.connect_timeout)
        .connect_with(options)
        .await
        .map_err(SchemaError::Connect)?;

    tracing::debug!("Database connected");
    Ok(pool)
}

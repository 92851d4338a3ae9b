//! Checks whether a migration's target shape is present in the database.

use serde::Serialize;
use sqlx::PgPool;

use crate::error::Result;
use crate::migrations::SchemaMigration;
use crate::schema::{ColumnSpec, SchemaChange};

/// Result of verification check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum VerifyResult {
    /// Every table, column and index exists with the expected type
    Passed,
    /// Some objects have not been created yet
    Incomplete { missing: Vec<String> },
    /// Objects exist but disagree with the migration (type or default)
    Failed { issues: Vec<String> },
}

/// Column as reported by `information_schema.columns`
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ColumnInfo {
    pub column_name: String,
    pub data_type: String,
    pub column_default: Option<String>,
}

pub async fn find_column(pool: &PgPool, table: &str, column: &str) -> Result<Option<ColumnInfo>> {
    let info = sqlx::query_as::<_, ColumnInfo>(
        r#"
        SELECT column_name::text AS column_name,
               data_type::text AS data_type,
               column_default::text AS column_default
        FROM information_schema.columns
        WHERE table_schema = current_schema()
          AND table_name = $1
          AND column_name = $2
        "#,
    )
    .bind(table)
    .bind(column)
    .fetch_optional(pool)
    .await?;

    Ok(info)
}

/// All columns of a table in ordinal order
pub async fn table_columns(pool: &PgPool, table: &str) -> Result<Vec<ColumnInfo>> {
    let columns = sqlx::query_as::<_, ColumnInfo>(
        r#"
        SELECT column_name::text AS column_name,
               data_type::text AS data_type,
               column_default::text AS column_default
        FROM information_schema.columns
        WHERE table_schema = current_schema()
          AND table_name = $1
        ORDER BY ordinal_position
        "#,
    )
    .bind(table)
    .fetch_all(pool)
    .await?;

    Ok(columns)
}

pub async fn table_exists(pool: &PgPool, table: &str) -> Result<bool> {
    let exists: (bool,) = sqlx::query_as(
        r#"
        SELECT EXISTS (
            SELECT 1 FROM information_schema.tables
            WHERE table_schema = current_schema()
              AND table_name = $1
        )
        "#,
    )
    .bind(table)
    .fetch_one(pool)
    .await?;

    Ok(exists.0)
}

pub async fn index_exists(pool: &PgPool, index: &str) -> Result<bool> {
    let exists: (bool,) = sqlx::query_as(
        r#"
        SELECT EXISTS (
            SELECT 1 FROM pg_indexes
            WHERE schemaname = current_schema()
              AND indexname = $1
        )
        "#,
    )
    .bind(index)
    .fetch_one(pool)
    .await?;

    Ok(exists.0)
}

#[derive(Default)]
struct Findings {
    missing: Vec<String>,
    issues: Vec<String>,
}

impl Findings {
    async fn check_column(&mut self, pool: &PgPool, table: &str, column: &ColumnSpec) -> Result<()> {
        let Some(info) = find_column(pool, table, column.name).await? else {
            self.missing.push(format!("column {}.{}", table, column.name));
            return Ok(());
        };

        let expected = column.column_type.information_schema_name();
        if info.data_type != expected {
            self.issues.push(format!(
                "column {}.{} is {} (expected {})",
                table, column.name, info.data_type, expected
            ));
            return Ok(());
        }

        // Only declared defaults are checked; SERIAL brings its own nextval()
        if let Some(default) = &column.default {
            match info.column_default.as_deref() {
                Some(actual) if default.matches_catalog(actual) => {}
                Some(actual) => self.issues.push(format!(
                    "column {}.{} defaults to {} (expected {})",
                    table,
                    column.name,
                    actual,
                    default.to_sql()
                )),
                None => self.issues.push(format!(
                    "column {}.{} has no default (expected {})",
                    table,
                    column.name,
                    default.to_sql()
                )),
            }
        }
        Ok(())
    }

    fn into_result(self) -> VerifyResult {
        if !self.issues.is_empty() {
            VerifyResult::Failed {
                issues: self.issues,
            }
        } else if !self.missing.is_empty() {
            VerifyResult::Incomplete {
                missing: self.missing,
            }
        } else {
            VerifyResult::Passed
        }
    }
}

pub async fn verify_migration(
    pool: &PgPool,
    migration: &dyn SchemaMigration,
) -> Result<VerifyResult> {
    let mut findings = Findings::default();

    for change in migration.changes() {
        match &change {
            SchemaChange::CreateTable(table) => {
                if !table_exists(pool, table.name).await? {
                    findings.missing.push(format!("table {}", table.name));
                    continue;
                }
                for column in &table.columns {
                    findings.check_column(pool, table.name, column).await?;
                }
            }
            SchemaChange::AddColumn { table, column } => {
                findings.check_column(pool, table, column).await?;
            }
            SchemaChange::CreateIndex(index) => {
                if !index_exists(pool, index.name).await? {
                    findings.missing.push(format!("index {}", index.name));
                }
            }
        }
    }

    let result = findings.into_result();
    tracing::debug!(migration = migration.name(), ?result, "Verification finished");
    Ok(result)
}

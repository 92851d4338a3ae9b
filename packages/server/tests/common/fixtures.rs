//! Test fixtures for creating leaderboard tables and rows.

use anyhow::Result;
use leaderboard_core::verify::table_columns;
use sqlx::PgPool;

/// Create `game_runs` as it looked before any additive migration ran:
/// core score columns only.
pub async fn create_legacy_game_runs(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE game_runs (
            id SERIAL PRIMARY KEY,
            score INTEGER NOT NULL,
            survival_time INTEGER NOT NULL,
            kills INTEGER NOT NULL,
            boss_kills INTEGER NOT NULL,
            patch_version VARCHAR(20) NOT NULL,
            completed_at TIMESTAMP DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Insert a run touching only the legacy columns. Returns its id.
pub async fn insert_run(pool: &PgPool, score: i32) -> Result<i32> {
    let (id,): (i32,) = sqlx::query_as(
        r#"
        INSERT INTO game_runs (score, survival_time, kills, boss_kills, patch_version)
        VALUES ($1, 300, 40, 1, '1.4.2')
        RETURNING id
        "#,
    )
    .bind(score)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

pub async fn count_runs(pool: &PgPool) -> Result<i64> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM game_runs")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// (name, data_type, default) for every column of `table`, in order
pub async fn column_snapshot(
    pool: &PgPool,
    table: &str,
) -> Result<Vec<(String, String, Option<String>)>> {
    Ok(table_columns(pool, table)
        .await?
        .into_iter()
        .map(|c| (c.column_name, c.data_type, c.column_default))
        .collect())
}

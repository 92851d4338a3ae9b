//! Typed vocabulary for idempotent schema changes.
//!
//! Every change renders to exactly one statement guarded by `IF NOT EXISTS`,
//! so applying the same change twice leaves the schema as it was after the
//! first run.

mod change;
mod column;

pub use change::{IndexDef, SchemaChange, TableDef};
pub use column::{ColumnDefault, ColumnSpec, ColumnType, References};

/// The leaderboard table every migration in this crate touches
pub const GAME_RUNS: &str = "game_runs";
pub const PLAYERS: &str = "players";

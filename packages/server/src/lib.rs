// Leaderboard database tooling
//
// Idempotent schema migrations and maintenance scripts for the game
// leaderboard's Postgres database. Each program in src/bin is a thin wrapper
// around `scripts`.

pub mod config;
pub mod db;
pub mod error;
pub mod leaderboard;
pub mod logging;
pub mod migrations;
pub mod runner;
pub mod schema;
pub mod scripts;
pub mod status;
pub mod verify;

pub use config::*;
pub use error::{Result, SchemaError};

//! Schema migrations for the leaderboard database
//!
//! Each migration is an ordered list of idempotent [`SchemaChange`]s. Running
//! a migration against a database that already has its target shape is a
//! no-op, so every migration can be re-run safely.
//!
//! # Usage
//!
//! 1. Implement the `SchemaMigration` trait for your migration
//! 2. Register it in `all_migrations()`
//! 3. Run it through `schema_cli apply <name>` or a dedicated binary
//!
//! # Example
//!
//! ```rust,ignore
//! pub struct AddPortalsUsedMigration;
//!
//! impl SchemaMigration for AddPortalsUsedMigration {
//!     fn name(&self) -> &'static str { "portals_used" }
//!
//!     fn changes(&self) -> Vec<SchemaChange> {
//!         vec![SchemaChange::add_column(
//!             GAME_RUNS,
//!             ColumnSpec::new("portals_used", ColumnType::Integer)
//!                 .default_value(ColumnDefault::Integer(0)),
//!         )]
//!     }
//! }
//! ```

pub mod death_cause;
pub mod init_schema;
pub mod radar_and_snitches;
pub mod shield_stats;

pub use death_cause::DeathCauseMigration;
pub use init_schema::InitSchemaMigration;
pub use radar_and_snitches::RadarAndSnitchesMigration;
pub use shield_stats::ShieldStatsMigration;

use crate::schema::SchemaChange;

/// Trait for implementing schema migrations
///
/// Each migration must be idempotent: every change it returns has to be
/// guarded so that applying it a second time changes nothing.
pub trait SchemaMigration: Send + Sync + 'static {
    /// Unique name for this migration (used by `schema_cli`)
    fn name(&self) -> &'static str;

    /// Optional description shown in migration list
    fn description(&self) -> &'static str {
        ""
    }

    /// Changes to apply, in order
    fn changes(&self) -> Vec<SchemaChange>;
}

/// Registry entry for a migration
pub struct MigrationEntry {
    pub migration: Box<dyn SchemaMigration>,
}

impl MigrationEntry {
    pub fn new<M: SchemaMigration>(m: M) -> Self {
        Self {
            migration: Box::new(m),
        }
    }
}

/// Get all registered migrations, in the order `apply-all` runs them
pub fn all_migrations() -> Vec<MigrationEntry> {
    vec![
        MigrationEntry::new(InitSchemaMigration),
        MigrationEntry::new(ShieldStatsMigration),
        MigrationEntry::new(RadarAndSnitchesMigration),
        MigrationEntry::new(DeathCauseMigration),
    ]
}

/// Find a migration by name
pub fn find_migration(name: &str) -> Option<MigrationEntry> {
    all_migrations().into_iter().find(|e| e.migration.name() == name)
}

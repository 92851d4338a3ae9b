use super::SchemaMigration;
use crate::schema::{ColumnDefault, ColumnSpec, ColumnType, SchemaChange, GAME_RUNS};

/// Records what killed the player; runs recorded before this column existed
/// read as "Unknown".
pub struct DeathCauseMigration;

pub fn death_cause_column() -> ColumnSpec {
    ColumnSpec::new("death_cause", ColumnType::VarChar(255))
        .default_value(ColumnDefault::Text("Unknown"))
}

impl SchemaMigration for DeathCauseMigration {
    fn name(&self) -> &'static str {
        "death_cause"
    }

    fn description(&self) -> &'static str {
        "Add death_cause column to game_runs"
    }

    fn changes(&self) -> Vec<SchemaChange> {
        vec![SchemaChange::add_column(GAME_RUNS, death_cause_column())]
    }
}

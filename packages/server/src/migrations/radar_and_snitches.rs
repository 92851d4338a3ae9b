use super::SchemaMigration;
use crate::schema::{ColumnDefault, ColumnSpec, ColumnType, SchemaChange, GAME_RUNS};

/// Adds the radar pickup counters and the snitch tally
pub struct RadarAndSnitchesMigration;

pub fn radar_counts_column() -> ColumnSpec {
    ColumnSpec::new("radar_counts", ColumnType::Jsonb).default_value(ColumnDefault::Json("{}"))
}

pub fn snitches_caught_column() -> ColumnSpec {
    ColumnSpec::new("snitches_caught", ColumnType::Integer)
        .default_value(ColumnDefault::Integer(0))
}

impl SchemaMigration for RadarAndSnitchesMigration {
    fn name(&self) -> &'static str {
        "radar_and_snitches"
    }

    fn description(&self) -> &'static str {
        "Add radar_counts and snitches_caught columns to game_runs"
    }

    fn changes(&self) -> Vec<SchemaChange> {
        vec![
            SchemaChange::add_column(GAME_RUNS, radar_counts_column()),
            SchemaChange::add_column(GAME_RUNS, snitches_caught_column()),
        ]
    }
}

use super::SchemaMigration;
use crate::schema::{ColumnDefault, ColumnSpec, ColumnType, SchemaChange, GAME_RUNS};

/// Total damage blocked plus its breakdown by source
pub struct ShieldStatsMigration;

pub const DAMAGE_BLOCKED_COLUMNS: [&str; 5] = [
    "damage_blocked",
    "damage_blocked_armor",
    "damage_blocked_collision",
    "damage_blocked_projectile",
    "damage_blocked_shield",
];

pub fn damage_blocked_columns() -> Vec<ColumnSpec> {
    DAMAGE_BLOCKED_COLUMNS
        .iter()
        .map(|&name| {
            ColumnSpec::new(name, ColumnType::BigInt).default_value(ColumnDefault::Integer(0))
        })
        .collect()
}

impl SchemaMigration for ShieldStatsMigration {
    fn name(&self) -> &'static str {
        "shield_stats"
    }

    fn description(&self) -> &'static str {
        "Add damage_blocked breakdown columns to game_runs"
    }

    fn changes(&self) -> Vec<SchemaChange> {
        damage_blocked_columns()
            .into_iter()
            .map(|column| SchemaChange::add_column(GAME_RUNS, column))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_in_order() {
        let sql: Vec<String> = ShieldStatsMigration
            .changes()
            .iter()
            .map(|c| c.to_sql())
            .collect();

        assert_eq!(sql.len(), 5);
        assert_eq!(
            sql[0],
            "ALTER TABLE game_runs ADD COLUMN IF NOT EXISTS damage_blocked BIGINT DEFAULT 0"
        );
        assert_eq!(
            sql[4],
            "ALTER TABLE game_runs ADD COLUMN IF NOT EXISTS damage_blocked_shield BIGINT DEFAULT 0"
        );
    }
}

use super::death_cause::death_cause_column;
use super::radar_and_snitches::{radar_counts_column, snitches_caught_column};
use super::shield_stats::damage_blocked_columns;
use super::SchemaMigration;
use crate::schema::{
    ColumnDefault, ColumnSpec, ColumnType, SchemaChange, TableDef, GAME_RUNS, PLAYERS,
};

/// Baseline schema for a fresh database: players, game_runs with every stat
/// column, and the indexes the leaderboard queries sort on.
pub struct InitSchemaMigration;

fn players_table() -> TableDef {
    TableDef {
        name: PLAYERS,
        columns: vec![
            ColumnSpec::new("id", ColumnType::Serial).primary_key(),
            ColumnSpec::new("username", ColumnType::VarChar(50))
                .unique()
                .not_null(),
            ColumnSpec::new("password_hash", ColumnType::VarChar(255)).not_null(),
            ColumnSpec::new("created_at", ColumnType::Timestamp)
                .default_value(ColumnDefault::Now),
            ColumnSpec::new("last_login", ColumnType::Timestamp)
                .default_value(ColumnDefault::Now),
        ],
    }
}

fn counter(name: &'static str, column_type: ColumnType) -> ColumnSpec {
    ColumnSpec::new(name, column_type).default_value(ColumnDefault::Integer(0))
}

fn game_runs_table() -> TableDef {
    let mut columns = vec![
        ColumnSpec::new("id", ColumnType::Serial).primary_key(),
        ColumnSpec::new("player_id", ColumnType::Integer)
            .references(PLAYERS, "id")
            .on_delete_cascade(),
        ColumnSpec::new("score", ColumnType::Integer).not_null(),
        ColumnSpec::new("survival_time", ColumnType::Integer).not_null(),
        ColumnSpec::new("kills", ColumnType::Integer).not_null(),
        ColumnSpec::new("boss_kills", ColumnType::Integer).not_null(),
        ColumnSpec::new("class_used", ColumnType::VarChar(50)),
        ColumnSpec::new("patch_version", ColumnType::VarChar(20)).not_null(),
        ColumnSpec::new("completed_at", ColumnType::Timestamp).default_value(ColumnDefault::Now),
        counter("damage_dealt", ColumnType::BigInt),
        counter("damage_taken", ColumnType::BigInt),
    ];

    columns.extend(damage_blocked_columns());
    columns.extend([
        counter("meteorites_collected", ColumnType::Integer),
        counter("portals_used", ColumnType::Integer),
        ColumnSpec::new("arena_times", ColumnType::Jsonb)
            .default_value(ColumnDefault::Json(r#"{"0": 0, "1": 0, "2": 0}"#)),
        ColumnSpec::new("legendary_hexes", ColumnType::Jsonb)
            .default_value(ColumnDefault::Json("[]")),
        ColumnSpec::new("hex_levelup_order", ColumnType::Jsonb)
            .default_value(ColumnDefault::Json("[]")),
        radar_counts_column(),
        snitches_caught_column(),
        death_cause_column(),
    ]);

    TableDef {
        name: GAME_RUNS,
        columns,
    }
}

impl SchemaMigration for InitSchemaMigration {
    fn name(&self) -> &'static str {
        "init_schema"
    }

    fn description(&self) -> &'static str {
        "Create players and game_runs tables with leaderboard indexes"
    }

    fn changes(&self) -> Vec<SchemaChange> {
        vec![
            SchemaChange::CreateTable(players_table()),
            SchemaChange::CreateTable(game_runs_table()),
            SchemaChange::create_index("idx_runs_score", GAME_RUNS, &["score DESC"]),
            SchemaChange::create_index("idx_runs_time", GAME_RUNS, &["survival_time DESC"]),
            SchemaChange::create_index(
                "idx_runs_patch",
                GAME_RUNS,
                &["patch_version", "score DESC"],
            ),
            SchemaChange::create_index(
                "idx_runs_daily",
                GAME_RUNS,
                &["DATE(completed_at)", "score DESC"],
            ),
            SchemaChange::create_index(
                "idx_runs_weekly",
                GAME_RUNS,
                &["DATE_TRUNC('week', completed_at)", "score DESC"],
            ),
            SchemaChange::create_index("idx_runs_player", GAME_RUNS, &["player_id", "score DESC"]),
        ]
    }
}

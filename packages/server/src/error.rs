use thiserror::Error;

/// Errors raised while configuring, connecting to, or evolving the leaderboard schema
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("DATABASE_URL must be set")]
    MissingDatabaseUrl,

    #[error("DATABASE_URL is not a valid Postgres connection string: {0}")]
    InvalidDatabaseUrl(#[source] sqlx::Error),

    #[error("{key} has an invalid value: {value:?}")]
    InvalidSetting { key: &'static str, value: String },

    #[error("Failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("Migration '{migration}' failed at step {step} ({description}): {source}")]
    Statement {
        migration: String,
        step: usize,
        description: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Migration '{0}' not found")]
    UnknownMigration(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl SchemaError {
    /// True for errors caused by the environment rather than the database
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::MissingDatabaseUrl | Self::InvalidDatabaseUrl(_) | Self::InvalidSetting { .. }
        )
    }
}

pub type Result<T, E = SchemaError> = std::result::Result<T, E>;

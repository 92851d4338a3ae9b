//! Column definitions and their SQL rendering

/// Postgres column types used by the leaderboard tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Serial,
    Integer,
    BigInt,
    VarChar(u16),
    Timestamp,
    Jsonb,
}

impl ColumnType {
    pub fn to_sql(&self) -> String {
        match self {
            Self::Serial => "SERIAL".to_string(),
            Self::Integer => "INTEGER".to_string(),
            Self::BigInt => "BIGINT".to_string(),
            Self::VarChar(len) => format!("VARCHAR({})", len),
            Self::Timestamp => "TIMESTAMP".to_string(),
            Self::Jsonb => "JSONB".to_string(),
        }
    }

    /// The `data_type` value `information_schema.columns` reports for this type
    pub fn information_schema_name(&self) -> &'static str {
        match self {
            Self::Serial | Self::Integer => "integer",
            Self::BigInt => "bigint",
            Self::VarChar(_) => "character varying",
            Self::Timestamp => "timestamp without time zone",
            Self::Jsonb => "jsonb",
        }
    }
}

/// Default value applied to new and existing rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnDefault {
    Text(&'static str),
    Integer(i64),
    /// JSON literal, cast to jsonb
    Json(&'static str),
    Now,
}

impl ColumnDefault {
    pub fn to_sql(&self) -> String {
        match self {
            Self::Text(s) => quote_literal(s),
            Self::Integer(n) => n.to_string(),
            Self::Json(s) => format!("{}::jsonb", quote_literal(s)),
            Self::Now => "NOW()".to_string(),
        }
    }

    /// Whether a `column_default` read back from `information_schema` holds
    /// this value. Postgres stores literals with a trailing cast, deparses
    /// jsonb in its own spacing and lowercases `NOW()`.
    pub fn matches_catalog(&self, catalog: &str) -> bool {
        let literal = strip_cast(catalog.trim());
        match self {
            Self::Text(s) => literal == quote_literal(s),
            Self::Integer(n) => literal.trim_matches('\'').parse::<i64>() == Ok(*n),
            Self::Json(s) => {
                let stored = unquote_literal(literal)
                    .and_then(|text| serde_json::from_str::<serde_json::Value>(&text).ok());
                let wanted = serde_json::from_str::<serde_json::Value>(s).ok();
                stored.is_some() && stored == wanted
            }
            Self::Now => {
                literal.eq_ignore_ascii_case("now()")
                    || literal.eq_ignore_ascii_case("CURRENT_TIMESTAMP")
            }
        }
    }
}

fn quote_literal(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

fn unquote_literal(s: &str) -> Option<String> {
    s.strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .map(|s| s.replace("''", "'"))
}

// `'x'::character varying` -> `'x'`; a `::` inside the quotes is left alone
fn strip_cast(expr: &str) -> &str {
    match expr.rfind("::") {
        Some(pos) if !expr[pos..].contains('\'') => &expr[..pos],
        _ => expr,
    }
}

/// Foreign key target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct References {
    pub table: &'static str,
    pub column: &'static str,
    pub on_delete_cascade: bool,
}

/// A single column: name, type, default and constraints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub column_type: ColumnType,
    pub default: Option<ColumnDefault>,
    pub primary_key: bool,
    pub unique: bool,
    pub not_null: bool,
    pub references: Option<References>,
}

impl ColumnSpec {
    pub fn new(name: &'static str, column_type: ColumnType) -> Self {
        Self {
            name,
            column_type,
            default: None,
            primary_key: false,
            unique: false,
            not_null: false,
            references: None,
        }
    }

    pub fn default_value(mut self, default: ColumnDefault) -> Self {
        self.default = Some(default);
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    pub fn references(mut self, table: &'static str, column: &'static str) -> Self {
        self.references = Some(References {
            table,
            column,
            on_delete_cascade: false,
        });
        self
    }

    pub fn on_delete_cascade(mut self) -> Self {
        if let Some(refs) = self.references.as_mut() {
            refs.on_delete_cascade = true;
        }
        self
    }

    /// Column definition as it appears in `CREATE TABLE` or `ADD COLUMN`
    pub fn definition_sql(&self) -> String {
        let mut sql = format!("{} {}", self.name, self.column_type.to_sql());

        if self.primary_key {
            sql.push_str(" PRIMARY KEY");
        }
        if let Some(refs) = &self.references {
            sql.push_str(&format!(" REFERENCES {}({})", refs.table, refs.column));
            if refs.on_delete_cascade {
                sql.push_str(" ON DELETE CASCADE");
            }
        }
        if self.unique {
            sql.push_str(" UNIQUE");
        }
        if self.not_null {
            sql.push_str(" NOT NULL");
        }
        if let Some(default) = &self.default {
            sql.push_str(" DEFAULT ");
            sql.push_str(&default.to_sql());
        }

        sql
    }
}

use super::column::ColumnSpec;

/// Table created with `CREATE TABLE IF NOT EXISTS`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDef {
    pub name: &'static str,
    pub columns: Vec<ColumnSpec>,
}

/// Index created with `CREATE INDEX IF NOT EXISTS`.
///
/// `keys` are raw key expressions, e.g. `score DESC` or `DATE(completed_at)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexDef {
    pub name: &'static str,
    pub table: &'static str,
    pub keys: Vec<&'static str>,
}

/// One idempotent schema statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaChange {
    CreateTable(TableDef),
    AddColumn {
        table: &'static str,
        column: ColumnSpec,
    },
    CreateIndex(IndexDef),
}

impl SchemaChange {
    pub fn add_column(table: &'static str, column: ColumnSpec) -> Self {
        Self::AddColumn { table, column }
    }

    pub fn create_index(name: &'static str, table: &'static str, keys: &[&'static str]) -> Self {
        Self::CreateIndex(IndexDef {
            name,
            table,
            keys: keys.to_vec(),
        })
    }

    /// Render as a single statement that is a no-op when already applied
    pub fn to_sql(&self) -> String {
        match self {
            Self::CreateTable(table) => {
                let columns = table
                    .columns
                    .iter()
                    .map(|c| format!("    {}", c.definition_sql()))
                    .collect::<Vec<_>>()
                    .join(",\n");
                format!(
                    "CREATE TABLE IF NOT EXISTS {} (\n{}\n)",
                    table.name, columns
                )
            }
            Self::AddColumn { table, column } => format!(
                "ALTER TABLE {} ADD COLUMN IF NOT EXISTS {}",
                table,
                column.definition_sql()
            ),
            Self::CreateIndex(index) => format!(
                "CREATE INDEX IF NOT EXISTS {} ON {}({})",
                index.name,
                index.table,
                index.keys.join(", ")
            ),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::CreateTable(table) => format!("Created {} table", table.name),
            Self::AddColumn { table, column } => {
                format!("Added {} column to {}", column.name, table)
            }
            Self::CreateIndex(index) => format!("Created index {}", index.name),
        }
    }

    pub fn table(&self) -> &'static str {
        match self {
            Self::CreateTable(table) => table.name,
            Self::AddColumn { table, .. } => table,
            Self::CreateIndex(index) => index.table,
        }
    }
}

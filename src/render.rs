//! Migration rendering.
//!
//! Turns a [`ChangeSet`] into a textual migration: an `-- Up` block that
//! applies the changes and a `-- Down` block that reverts them. Dialect
//! only affects how column drops are emitted: SQLite before 3.35 cannot
//! `DROP COLUMN`, so the SQLite dialect emits a manual-action comment
//! instead of the statement.

use std::fmt;

use crate::diff::ChangeSet;
use crate::schema::ColumnSet;

/// Target SQL engine for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    /// SQLite: column drops become manual-action comments.
    #[default]
    Sqlite,
    /// Any other engine (e.g. PostgreSQL): `DROP COLUMN` emitted directly.
    Generic,
}

impl Dialect {
    /// Maps a dialect name to a [`Dialect`]. Only the exact string
    /// `"sqlite"` selects [`Dialect::Sqlite`]; every other value passes
    /// through as [`Dialect::Generic`], unvalidated.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name == "sqlite" {
            Self::Sqlite
        } else {
            Self::Generic
        }
    }

    /// The statement (or comment) that drops `column` from `table`.
    fn drop_column(self, table: &str, column: &str) -> String {
        match self {
            Self::Sqlite => format!(
                "-- SQLite: ALTER TABLE {table} DROP COLUMN {column}; (requires SQLite 3.35+)"
            ),
            Self::Generic => format!("ALTER TABLE {table} DROP COLUMN {column};"),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sqlite => write!(f, "sqlite"),
            Self::Generic => write!(f, "generic"),
        }
    }
}

/// Sentinel output when the change set is empty.
pub const NO_CHANGES: &str = "-- No changes detected\n";

/// Renders a change set as an `-- Up`/`-- Down` migration.
///
/// Categories are rendered in a fixed order (added tables, removed tables,
/// added columns, removed columns) so identical inputs always produce
/// identical text. An empty change set renders as [`NO_CHANGES`].
#[must_use]
pub fn render_migration(changes: &ChangeSet, dialect: Dialect) -> String {
    if changes.is_empty() {
        return NO_CHANGES.to_string();
    }

    let mut up_lines = vec!["-- Up".to_string()];
    let mut down_lines = vec!["-- Down".to_string()];

    for (table, columns) in &changes.added_tables {
        up_lines.push(create_table(table, columns));
        down_lines.push(format!("DROP TABLE IF EXISTS {table};"));
    }

    for (table, columns) in &changes.removed_tables {
        up_lines.push(format!("DROP TABLE IF EXISTS {table};"));
        down_lines.push(create_table(table, columns));
    }

    for (table, columns) in &changes.added_columns {
        for (column, definition) in columns {
            up_lines.push(format!(
                "ALTER TABLE {table} ADD COLUMN {column} {definition};"
            ));
            down_lines.push(dialect.drop_column(table, column));
        }
    }

    for (table, columns) in &changes.removed_columns {
        for (column, definition) in columns {
            up_lines.push(dialect.drop_column(table, column));
            down_lines.push(format!(
                "ALTER TABLE {table} ADD COLUMN {column} {definition};"
            ));
        }
    }

    format!("{}\n\n{}\n", up_lines.join("\n"), down_lines.join("\n"))
}

/// Renders a full `CREATE TABLE` statement with one column per line,
/// indented four spaces.
fn create_table(table: &str, columns: &ColumnSet) -> String {
    let cols = columns
        .iter()
        .map(|(name, definition)| format!("{name} {definition}"))
        .collect::<Vec<_>>()
        .join(",\n    ");
    format!("CREATE TABLE {table} (\n    {cols}\n);")
}

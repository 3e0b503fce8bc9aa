//! Schema diff engine.
//!
//! Compares an "old" and a "new" [`Schema`] and produces a [`ChangeSet`]
//! describing added/removed tables and added/removed columns. Columns are
//! compared by name only: a column whose type changed but whose name did
//! not is invisible to the diff. Known limitation.

use indexmap::IndexMap;

use crate::schema::{ColumnSet, Schema};

/// Result of comparing two schemas.
///
/// Derived by [`diff_schemas`] and never mutated afterwards. A table
/// present in both schemas is never counted as added or removed; only its
/// columns are diffed, so a table name appears in at most one of
/// `added_tables`/`removed_tables`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    /// Tables present in new but not in old, with their full column sets.
    pub added_tables: IndexMap<String, ColumnSet>,
    /// Tables present in old but not in new, with their full column sets.
    pub removed_tables: IndexMap<String, ColumnSet>,
    /// Columns present only in the new version of a shared table.
    pub added_columns: IndexMap<String, ColumnSet>,
    /// Columns present only in the old version of a shared table.
    pub removed_columns: IndexMap<String, ColumnSet>,
}

impl ChangeSet {
    /// Returns `true` if there are no changes in any category.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added_tables.is_empty()
            && self.removed_tables.is_empty()
            && self.added_columns.is_empty()
            && self.removed_columns.is_empty()
    }

    /// Human-readable summary lines for dry-run output, in the same
    /// category order the renderer uses.
    #[must_use]
    pub fn summary(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if !self.added_tables.is_empty() {
            lines.push(format!("Tables to add: {}", join_keys(&self.added_tables)));
        }
        if !self.removed_tables.is_empty() {
            lines.push(format!(
                "Tables to remove: {}",
                join_keys(&self.removed_tables)
            ));
        }
        for (table, cols) in &self.added_columns {
            lines.push(format!("Columns to add in {table}: {}", join_keys(cols)));
        }
        for (table, cols) in &self.removed_columns {
            lines.push(format!(
                "Columns to remove from {table}: {}",
                join_keys(cols)
            ));
        }
        lines
    }
}

fn join_keys<V>(map: &IndexMap<String, V>) -> String {
    map.keys().cloned().collect::<Vec<_>>().join(", ")
}

/// Compares two schemas and returns the changes needed to go from `old`
/// to `new`.
///
/// Ordering is deterministic: added tables and added/removed columns follow
/// the new schema's table order, removed tables follow the old schema's
/// table order, and columns keep the insertion order of the schema they
/// came from.
#[must_use]
pub fn diff_schemas(old: &Schema, new: &Schema) -> ChangeSet {
    let mut changes = ChangeSet::default();

    for (table, columns) in new.tables() {
        if !old.contains_table(table) {
            changes
                .added_tables
                .insert(table.to_string(), columns.clone());
        }
    }
    for (table, columns) in old.tables() {
        if !new.contains_table(table) {
            changes
                .removed_tables
                .insert(table.to_string(), columns.clone());
        }
    }

    for (table, new_columns) in new.tables() {
        let Some(old_columns) = old.get_table(table) else {
            continue;
        };
        for (name, definition) in new_columns {
            if !old_columns.contains_key(name) {
                changes
                    .added_columns
                    .entry(table.to_string())
                    .or_default()
                    .insert(name.clone(), definition.clone());
            }
        }
        for (name, definition) in old_columns {
            if !new_columns.contains_key(name) {
                changes
                    .removed_columns
                    .entry(table.to_string())
                    .or_default()
                    .insert(name.clone(), definition.clone());
            }
        }
    }

    changes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_schema;

    #[test]
    fn identical_schemas_produce_empty_changeset() {
        let schema = parse_schema("CREATE TABLE t (id INTEGER, name TEXT);");
        let changes = diff_schemas(&schema, &schema);
        assert!(changes.is_empty());
    }

    #[test]
    fn added_table_detected_with_full_columns() {
        let old = Schema::new();
        let new = parse_schema("CREATE TABLE t (id INTEGER);");
        let changes = diff_schemas(&old, &new);

        assert_eq!(changes.added_tables.len(), 1);
        assert!(changes.removed_tables.is_empty());
        let cols = &changes.added_tables["t"];
        assert_eq!(cols.get("id").map(String::as_str), Some("INTEGER"));
    }

    #[test]
    fn removed_table_detected_with_full_columns() {
        let old = parse_schema("CREATE TABLE t (id INTEGER);");
        let new = Schema::new();
        let changes = diff_schemas(&old, &new);

        assert!(changes.added_tables.is_empty());
        assert_eq!(changes.removed_tables.len(), 1);
        assert!(changes.removed_tables.contains_key("t"));
    }

    #[test]
    fn shared_table_never_counted_as_added_or_removed() {
        let old = parse_schema("CREATE TABLE t (id INTEGER);");
        let new = parse_schema("CREATE TABLE t (id INTEGER, email TEXT);");
        let changes = diff_schemas(&old, &new);

        assert!(changes.added_tables.is_empty());
        assert!(changes.removed_tables.is_empty());
        assert_eq!(changes.added_columns["t"].len(), 1);
        assert_eq!(
            changes.added_columns["t"].get("email").map(String::as_str),
            Some("TEXT")
        );
    }

    #[test]
    fn removed_column_detected() {
        let old = parse_schema("CREATE TABLE t (id INTEGER, email TEXT);");
        let new = parse_schema("CREATE TABLE t (id INTEGER);");
        let changes = diff_schemas(&old, &new);

        assert_eq!(changes.removed_columns["t"].len(), 1);
        assert!(changes.removed_columns["t"].contains_key("email"));
    }

    #[test]
    fn type_change_is_invisible() {
        let old = parse_schema("CREATE TABLE t (score INTEGER);");
        let new = parse_schema("CREATE TABLE t (score BIGINT);");
        let changes = diff_schemas(&old, &new);
        assert!(changes.is_empty());
    }

    #[test]
    fn diff_is_antisymmetric() {
        let old = parse_schema(
            "CREATE TABLE kept (id INTEGER, gone TEXT);\nCREATE TABLE dropped (id INTEGER);",
        );
        let new = parse_schema(
            "CREATE TABLE kept (id INTEGER, fresh TEXT);\nCREATE TABLE created (id INTEGER);",
        );

        let forward = diff_schemas(&old, &new);
        let backward = diff_schemas(&new, &old);

        assert_eq!(forward.added_tables, backward.removed_tables);
        assert_eq!(forward.removed_tables, backward.added_tables);
        assert_eq!(forward.added_columns, backward.removed_columns);
        assert_eq!(forward.removed_columns, backward.added_columns);
    }

    #[test]
    fn column_order_follows_source_schema() {
        let old = parse_schema("CREATE TABLE t (id INTEGER);");
        let new = parse_schema("CREATE TABLE t (id INTEGER, b TEXT, a TEXT);");
        let changes = diff_schemas(&old, &new);

        let names: Vec<&String> = changes.added_columns["t"].keys().collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn summary_lines() {
        let old = parse_schema("CREATE TABLE kept (id INTEGER, gone TEXT);\nCREATE TABLE legacy (id INTEGER);");
        let new = parse_schema("CREATE TABLE kept (id INTEGER, fresh TEXT);\nCREATE TABLE shiny (id INTEGER);");
        let changes = diff_schemas(&old, &new);

        let lines = changes.summary();
        assert_eq!(
            lines,
            vec![
                "Tables to add: shiny".to_string(),
                "Tables to remove: legacy".to_string(),
                "Columns to add in kept: fresh".to_string(),
                "Columns to remove from kept: gone".to_string(),
            ]
        );
    }
}

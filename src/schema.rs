//! Schema representation types.
//!
//! A [`Schema`] maps table names to their columns, and a [`ColumnSet`] maps
//! column names to the raw type/constraint text taken verbatim from the
//! schema dump. Both preserve insertion order so that diffing and rendering
//! are deterministic for identical inputs.

use indexmap::IndexMap;

/// Columns of a single table: column name → raw definition text
/// (e.g. `"INTEGER PRIMARY KEY"`), insertion order preserved.
pub type ColumnSet = IndexMap<String, String>;

/// The complete schema extracted from one SQL dump (all tables).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    tables: IndexMap<String, ColumnSet>,
}

impl Schema {
    /// Creates a new empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a table, replacing any previous table of the same name
    /// entirely (last wins, no merge).
    pub fn insert_table(&mut self, name: impl Into<String>, columns: ColumnSet) {
        self.tables.insert(name.into(), columns);
    }

    /// Gets a table's columns by name.
    #[must_use]
    pub fn get_table(&self, name: &str) -> Option<&ColumnSet> {
        self.tables.get(name)
    }

    /// Returns `true` if the schema contains the named table.
    #[must_use]
    pub fn contains_table(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Iterates over tables in insertion order.
    pub fn tables(&self) -> impl Iterator<Item = (&str, &ColumnSet)> {
        self.tables.iter().map(|(name, cols)| (name.as_str(), cols))
    }

    /// Returns table names in insertion order.
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Returns the number of tables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns `true` if the schema has no tables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

//! Schema parser.
//!
//! Extracts a [`Schema`] from raw SQL text by scanning for
//! `CREATE TABLE <name> ( <body> );` blocks and splitting each body into
//! column definitions. The parser is deliberately forgiving: anything it
//! cannot make sense of is skipped, and malformed SQL yields a partial or
//! empty schema rather than an error.

use std::path::Path;

use regex::Regex;
use tracing::debug;

use crate::error::{DriftError, Result};
use crate::schema::{ColumnSet, Schema};

/// Table-level constraint keywords. A body fragment starting with one of
/// these is a constraint line, not a column definition.
const CONSTRAINT_KEYWORDS: &[&str] =
    &["PRIMARY KEY", "FOREIGN KEY", "UNIQUE", "CHECK", "CONSTRAINT"];

/// Parses `CREATE TABLE` statements out of raw SQL text.
#[derive(Debug, Clone)]
pub struct SchemaParser {
    table_re: Regex,
}

impl Default for SchemaParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaParser {
    /// Creates a new parser.
    ///
    /// # Panics
    ///
    /// Panics if the built-in pattern fails to compile, which cannot happen
    /// for a fixed, valid pattern.
    #[must_use]
    pub fn new() -> Self {
        // Case-insensitive, dot matches newline, non-greedy body so one
        // match never swallows the next statement.
        let table_re = Regex::new(r"(?is)CREATE\s+TABLE\s+(\w+)\s*\((.*?)\);")
            .expect("invalid CREATE TABLE regex");
        Self { table_re }
    }

    /// Parses all `CREATE TABLE` blocks in `sql` into a [`Schema`].
    ///
    /// Later blocks for the same table name overwrite earlier ones (last
    /// wins). Input with no `CREATE TABLE` at all yields an empty schema.
    /// A statement missing its closing `);` is silently ignored.
    ///
    /// Bodies are split on literal commas without tracking parenthesis
    /// depth, so a definition like `CHECK (a > 0, b < 10)` misparses.
    /// Known limitation.
    #[must_use]
    pub fn parse(&self, sql: &str) -> Schema {
        let mut schema = Schema::new();
        for captures in self.table_re.captures_iter(sql) {
            let table_name = &captures[1];
            let body = &captures[2];
            let columns = parse_columns(body);
            debug!(table = table_name, columns = columns.len(), "parsed table");
            schema.insert_table(table_name, columns);
        }
        schema
    }
}

/// Splits a `CREATE TABLE` body into column name → definition pairs.
fn parse_columns(body: &str) -> ColumnSet {
    let mut columns = ColumnSet::new();
    for fragment in body.split(',') {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            continue;
        }
        let upper = fragment.to_uppercase();
        if CONSTRAINT_KEYWORDS.iter().any(|kw| upper.starts_with(kw)) {
            continue;
        }
        let mut tokens = fragment.split_whitespace();
        let Some(name) = tokens.next() else {
            continue;
        };
        let definition = tokens.collect::<Vec<_>>().join(" ");
        if definition.is_empty() {
            // A lone token is not a column definition.
            continue;
        }
        columns.insert(name.to_string(), definition);
    }
    columns
}

/// Convenience wrapper: parses `sql` with a fresh [`SchemaParser`].
#[must_use]
pub fn parse_schema(sql: &str) -> Schema {
    SchemaParser::new().parse(sql)
}

/// Reads and parses one schema file.
///
/// # Errors
///
/// Returns [`DriftError::FileNotFound`] when `path` does not exist, or
/// [`DriftError::Io`] when the file cannot be read. Parsing itself never
/// fails.
pub fn load_schema(path: &Path) -> Result<Schema> {
    if !path.exists() {
        return Err(DriftError::FileNotFound(path.to_path_buf()));
    }
    let sql = std::fs::read_to_string(path)?;
    let schema = parse_schema(&sql);
    debug!(path = %path.display(), tables = schema.len(), "parsed schema file");
    Ok(schema)
}

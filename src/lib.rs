//! Generate SQL migrations by diffing two schema dump files.
//!
//! `sqldrift` compares an old and a new SQL schema dump and emits a textual
//! migration: an `-- Up` block that applies the difference and a `-- Down`
//! block that reverts it.
//!
//! # Pipeline
//!
//! - **Parser** ([`parser`]) - scans the dumps for `CREATE TABLE` blocks and
//!   builds a table → column mapping per file.
//! - **Diff** ([`diff`]) - compares the two mappings into a [`ChangeSet`]
//!   of added/removed tables and columns.
//! - **Renderer** ([`render`]) - renders the change set as up/down SQL,
//!   dialect-aware where SQLite's `DROP COLUMN` limitations apply.
//!
//! # Example
//!
//! ```rust
//! use sqldrift::prelude::*;
//!
//! let old = parse_schema("CREATE TABLE users (id INTEGER PRIMARY KEY);");
//! let new = parse_schema(
//!     "CREATE TABLE users (id INTEGER PRIMARY KEY, email TEXT);",
//! );
//!
//! let changes = diff_schemas(&old, &new);
//! let migration = render_migration(&changes, Dialect::Generic);
//! assert!(migration.contains("ALTER TABLE users ADD COLUMN email TEXT;"));
//! ```
//!
//! Parsing is deliberately lossy: table-level constraint lines are skipped,
//! commas are split without tracking parentheses, and malformed statements
//! degrade to partial results instead of errors.
//!
//! [`ChangeSet`]: diff::ChangeSet

pub mod diff;
pub mod error;
pub mod parser;
pub mod render;
pub mod schema;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::diff::{diff_schemas, ChangeSet};
    pub use crate::error::{DriftError, Result};
    pub use crate::parser::{load_schema, parse_schema, SchemaParser};
    pub use crate::render::{render_migration, Dialect, NO_CHANGES};
    pub use crate::schema::{ColumnSet, Schema};
}

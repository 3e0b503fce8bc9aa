//! Error types for the schema diff tool.

use std::path::PathBuf;

/// Errors that can occur while loading schema files.
///
/// Parsing itself never fails: malformed SQL degrades to an empty or
/// partial [`Schema`](crate::schema::Schema) instead of raising.
#[derive(Debug, thiserror::Error)]
pub enum DriftError {
    /// An input schema file does not exist.
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// IO error (reading a schema file or writing the migration).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for schema diff operations.
pub type Result<T> = std::result::Result<T, DriftError>;

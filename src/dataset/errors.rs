//! # Dataset Errors
//!
//! Load-time and lookup errors for the in-memory dataset.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for table loading
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors raised while loading a table at startup.
///
/// Every variant is fatal: the server must not start with a missing or
/// malformed table.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Source could not be opened or read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed row, inconsistent column count or a value of the wrong type
    #[error("Malformed {table} data: {source}")]
    Csv {
        table: String,
        #[source]
        source: csv::Error,
    },

    /// Header lacks a column the table requires
    #[error("Table {table} is missing required column '{column}'")]
    MissingColumn { table: String, column: String },
}

impl LoadError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LoadError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn csv(table: impl Into<String>, source: csv::Error) -> Self {
        LoadError::Csv {
            table: table.into(),
            source,
        }
    }

    pub fn missing_column(table: impl Into<String>, column: impl Into<String>) -> Self {
        LoadError::MissingColumn {
            table: table.into(),
            column: column.into(),
        }
    }
}

/// Errors raised by dataset accessors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// Name is not one of the four fixed tables
    #[error("Unknown table: {0}")]
    UnknownTable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_message() {
        let err = LoadError::missing_column("movies", "title");
        assert_eq!(
            err.to_string(),
            "Table movies is missing required column 'title'"
        );
    }

    #[test]
    fn test_unknown_table_message() {
        let err = DatasetError::UnknownTable("users".to_string());
        assert_eq!(err.to_string(), "Unknown table: users");
    }
}

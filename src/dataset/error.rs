//! Dataset loading error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the dataset
///
/// All of these are fatal at startup; the server never runs without data.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be opened or read
    #[error("Failed to read dataset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV itself is malformed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A column the dashboard depends on is absent from the header
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A `Date` cell is not in `YYYY-MM-DD` form
    #[error("Line {line}: invalid date {value:?}")]
    InvalidDate { line: u64, value: String },

    /// A numeric cell could not be parsed
    #[error("Line {line}: invalid number {value:?} in column {column:?}")]
    InvalidNumber {
        line: u64,
        column: String,
        value: String,
    },
}

/// Result type alias for dataset operations
pub type LoadResult<T> = Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LoadError::MissingColumn("Date".to_string());
        assert_eq!(err.to_string(), "Missing required column: Date");

        let err = LoadError::InvalidDate {
            line: 3,
            value: "01/04/2015".to_string(),
        };
        assert_eq!(err.to_string(), "Line 3: invalid date \"01/04/2015\"");
    }
}

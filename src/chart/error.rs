//! Chart building error types

use thiserror::Error;

/// Errors raised while building a chart
///
/// These indicate a mismatch between the chart definition and the dataset,
/// never a bad user selection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The requested column does not exist in the table
    #[error("Unknown field: {0}")]
    UnknownField(String),
}

/// Result type alias for chart operations
pub type ChartResult<T> = Result<T, FieldError>;

//! Dashboard error types

use thiserror::Error;

/// Errors raised while building the page layout
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A configured initial dropdown value is not among the options
    #[error("Initial value {value:?} for {control} is not present in the dataset")]
    MissingInitialValue { control: String, value: String },
}

/// Errors raised while decoding the inputs of a callback request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindingError {
    /// A declared input was not supplied
    #[error("Missing input {id}.{property}")]
    MissingInput { id: String, property: String },

    /// An input was supplied with the wrong JSON type
    #[error("Input {id}.{property} must be a string")]
    NotAString { id: String, property: String },

    /// A date input could not be parsed
    #[error("Invalid date for {id}.{property}: {value:?}")]
    InvalidDate {
        id: String,
        property: String,
        value: String,
    },
}

//! Avocado Sales Dataset
//!
//! - **types**: `SalesRecord`, `Table`, `View`, `FilterSelection`
//! - **loader**: CSV loading and cleaning
//! - **error**: Error types
//!
//! The table is loaded once at startup and shared read-only for the life of
//! the process. Filtering borrows rows from it and never mutates it.

pub mod error;
pub mod loader;
pub mod types;

pub use error::{LoadError, LoadResult};
pub use loader::{load, load_from_reader, round_volume, DATE_FORMAT};
pub use types::{
    FieldValue, FilterSelection, SalesRecord, Table, View, DATE_COLUMN, PRICE_COLUMN,
    REGION_COLUMN, REQUIRED_COLUMNS, TYPE_COLUMN, VOLUME_COLUMN,
};

//! Dashboard
//!
//! - **layout**: The static component tree, built once at startup
//! - **callback**: The update callback bound to the filter controls
//! - **error**: Error types
//!
//! ```text
//! region-filter.value ─┐
//! type-filter.value ───┤                 ┌─> price-chart.figure
//! date-range.start_date┼─> update() ─────┤
//! date-range.end_date ─┘                 └─> volume-chart.figure
//! ```

pub mod callback;
pub mod error;
pub mod layout;

pub use callback::{
    bindings, price_chart_style, selection_from_inputs, update, volume_chart_style, Binding,
    CallbackSpec, InputValue,
};
pub use error::{BindingError, LayoutError};
pub use layout::{Component, DropdownOption, UiTree, PAGE_TITLE};

pub const REGION_FILTER_ID: &str = "region-filter";
pub const TYPE_FILTER_ID: &str = "type-filter";
pub const DATE_RANGE_ID: &str = "date-range";
pub const PRICE_CHART_ID: &str = "price-chart";
pub const VOLUME_CHART_ID: &str = "volume-chart";

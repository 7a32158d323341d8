//! Line Charts
//!
//! - **figure**: Serializable chart object (Plotly.js figure JSON)
//! - **builder**: Builds a figure from a dataset view
//! - **error**: Error types

pub mod builder;
pub mod error;
pub mod figure;

pub use builder::{build, ChartStyle};
pub use error::{ChartResult, FieldError};
pub use figure::{Axis, AxisTitle, Figure, Layout, Line, Title, Trace};

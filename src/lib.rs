//! # Avocado Analytics
//!
//! An interactive dashboard of avocado prices and sales volume in the US,
//! served over HTTP with Axum.
//!
//! ## Modules
//!
//! - [`dataset`]: CSV loading, the immutable sales table and filtering
//! - [`chart`]: Line chart objects rendered in the browser by Plotly.js
//! - [`dashboard`]: Page layout and the update callback
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use avocado_analytics::dataset::{self, FilterSelection};
//! use avocado_analytics::dashboard;
//! use chrono::NaiveDate;
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let table = dataset::load(Path::new("data/avocado.csv"))?;
//!
//!     let selection = FilterSelection::new(
//!         "Albany",
//!         "organic",
//!         NaiveDate::from_ymd_opt(2015, 1, 1).unwrap(),
//!         NaiveDate::from_ymd_opt(2015, 12, 31).unwrap(),
//!     );
//!     let (price, volume) = dashboard::update(&table, &selection)?;
//!
//!     println!("{} price points, {} volume points", price.point_count(), volume.point_count());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod chart;
pub mod config;
pub mod dashboard;
pub mod dataset;

// Re-export top-level types for convenience
pub use dataset::{FilterSelection, LoadError, SalesRecord, Table, View};

pub use chart::{ChartStyle, FieldError, Figure};

pub use dashboard::{BindingError, LayoutError, UiTree};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{Config, ConfigError, ConfigSource, InitialSelection, LoadedConfig};

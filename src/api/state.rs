//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;
use crate::dashboard::UiTree;
use crate::dataset::Table;

/// Shared application state for all handlers
///
/// The table and the layout are built before the server starts and are
/// read-only from then on, so handlers share them without locking.
#[derive(Clone)]
pub struct AppState {
    /// The loaded dataset
    pub table: Arc<Table>,
    /// The page layout, built once from the dataset
    pub layout: Arc<UiTree>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(table: Arc<Table>, layout: UiTree, config: ServerConfig) -> Self {
        Self {
            table,
            layout: Arc::new(layout),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

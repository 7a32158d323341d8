//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::chart::Figure;
use crate::dashboard::InputValue;

// ============================================
// CALLBACK DTOs
// ============================================

/// Callback request: current values of every bound input
#[derive(Debug, Deserialize)]
pub struct CallbackRequest {
    pub inputs: Vec<InputValue>,
}

/// Callback response, keyed by output component id
#[derive(Debug, Serialize)]
pub struct CallbackResponse {
    pub response: BTreeMap<String, GraphOutput>,
}

/// New value of a graph's `figure` property
#[derive(Debug, Serialize)]
pub struct GraphOutput {
    pub figure: Figure,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, degraded
    pub status: String,
    /// Rows in the loaded dataset
    pub rows: usize,
    /// Distinct regions in the dataset
    pub regions: usize,
    /// Distinct avocado types in the dataset
    pub types: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}

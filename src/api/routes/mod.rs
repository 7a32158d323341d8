//! API Routes
//!
//! Route handlers organized by functionality.

pub mod assets;
pub mod dashboard;
pub mod health;

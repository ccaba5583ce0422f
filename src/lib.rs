//! # River Monitor Client
//!
//! Async client for the river-monitoring dashboard API. It covers the sensor
//! network (water level, temperature, flow), alerts, users and reports of the
//! monitoring authority.
//!
//! The client keeps the session tokens in an explicit [`storage::TokenStore`]
//! and recovers from an expired access token with a single refresh-and-retry.
//!
//! ## Example
//!
//! ```ignore
//! use river_monitor_client::prelude::*;
//!
//! let client = Client::new(Config::new()).await?;
//! client.login("operator", "secret").await?;
//!
//! let summary = client.get_dashboard_summary().await?;
//! info!("{} sensors, {} critical", summary.total_sensors, summary.critical_count);
//! ```

/// Authentication, configuration, service interfaces and resource models
pub mod application;
/// Global constants
pub mod constants;
/// Error type shared by the whole crate
pub mod error;
/// Wire-level models and the authenticated HTTP client
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Table rendering for terminal dashboards
pub mod presentation;
/// Session token storage
pub mod storage;
/// Logging and environment helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}

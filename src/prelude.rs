/******************************************************************************
   Author: River Monitoring Authority
   Date: 16/10/26
******************************************************************************/

//! # River Monitor Client Prelude
//!
//! Brings the client, its service traits, the resource models and the error
//! type into scope with a single import.
//!
//! ```rust
//! use river_monitor_client::prelude::*;
//!
//! let config = Config::with_base_url("http://localhost:8000/api");
//! assert_eq!(config.url_for("/sensors/sensors/"), "http://localhost:8000/api/sensors/sensors/");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Client configuration
pub use crate::application::config::{Config, Credentials, RestApiConfig, StorageConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// AUTHENTICATION AND TRANSPORT
// ============================================================================

/// Session token lifecycle
pub use crate::application::auth::Auth;

/// Token pair held by a session
pub use crate::model::auth::TokenPair;

/// Authenticated HTTP client
pub use crate::model::http::HttpClient;

/// Token storage
pub use crate::storage::{FileTokenStore, MemoryTokenStore, TokenStore};

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

/// High-level client
pub use crate::application::client::Client;

/// Service traits implemented by [`Client`]
pub use crate::application::interfaces::{
    alert::AlertService, report::ReportService, sensor::SensorService, user::UserService,
};

// ============================================================================
// MODELS
// ============================================================================

/// Resource models
pub use crate::application::models::{
    Alert, AlertSeverity, AlertState, AlertSummary, CreateReportRequest, DashboardSummary,
    LevelStatus, ListResponse, Report, ReportStatus, ReportType, River, Sensor, SensorReading,
    SensorStatistics, SensorStatus, SystemStatus, User,
};

// ============================================================================
// PRESENTATION AND UTILITIES
// ============================================================================

/// Terminal tables
pub use crate::presentation::{AlertCounts, AlertTable, SensorTable};

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date/time handling
pub use chrono::{DateTime, Utc};

/// Re-export reqwest for custom requests through [`HttpClient::request`]
pub use reqwest::{Method, StatusCode};

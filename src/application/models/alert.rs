use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of an alert
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    /// Informational
    Info,
    /// Needs attention
    Warning,
    /// Needs immediate action
    Critical,
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AlertSeverity::Info => "info",
            AlertSeverity::Warning => "warning",
            AlertSeverity::Critical => "critical",
        };
        write!(f, "{s}")
    }
}

/// Handling state of an alert
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AlertState {
    /// Raised and not yet handled
    Active,
    /// Seen by an operator
    Acknowledged,
    /// Closed
    Resolved,
}

impl fmt::Display for AlertState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AlertState::Active => "active",
            AlertState::Acknowledged => "acknowledged",
            AlertState::Resolved => "resolved",
        };
        write!(f, "{s}")
    }
}

/// Alert raised for a sensor
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct Alert {
    /// Alert identifier
    pub id: i64,
    /// Identifier of the sensor that raised the alert
    pub sensor: String,
    /// Name of the sensor
    #[serde(default)]
    pub sensor_name: String,
    /// Name of the river the sensor is on
    #[serde(default)]
    pub river_name: String,
    /// Reading that triggered the alert
    #[serde(default)]
    pub sensor_reading: Option<i64>,
    /// Severity
    pub severity: AlertSeverity,
    /// Handling state
    pub status: AlertState,
    /// Short title
    pub title: String,
    /// Full message
    pub message: String,
    /// When the alert was raised
    pub created_at: DateTime<Utc>,
    /// When the alert was acknowledged
    #[serde(default)]
    pub acknowledged_at: Option<DateTime<Utc>>,
    /// User who acknowledged the alert
    #[serde(default)]
    pub acknowledged_by: Option<i64>,
    /// Name of the user who acknowledged the alert
    #[serde(default)]
    pub acknowledged_by_name: Option<String>,
    /// When the alert was resolved
    #[serde(default)]
    pub resolved_at: Option<DateTime<Utc>>,
    /// User who resolved the alert
    #[serde(default)]
    pub resolved_by: Option<i64>,
    /// Name of the user who resolved the alert
    #[serde(default)]
    pub resolved_by_name: Option<String>,
}

impl Alert {
    /// Whether the alert still waits for an operator
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == AlertState::Active
    }

    /// Only active alerts can be acknowledged
    #[must_use]
    pub fn can_acknowledge(&self) -> bool {
        self.is_active()
    }

    /// Alerts that are not resolved yet can be resolved
    #[must_use]
    pub fn can_resolve(&self) -> bool {
        self.status != AlertState::Resolved
    }
}

/// Alert counters for the dashboard
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AlertSummary {
    /// All alerts
    pub total_alerts: u32,
    /// Alerts in the active state
    pub active_alerts: u32,
    /// Active alerts with critical severity
    pub critical_alerts: u32,
    /// Active alerts with warning severity
    pub warning_alerts: u32,
    /// Alerts in the acknowledged state
    pub acknowledged_alerts: u32,
    /// Alerts raised in the last 24 hours
    pub recent_alerts_24h: u32,
}

/******************************************************************************
   Author: River Monitoring Authority
   Date: 16/10/26
******************************************************************************/
use chrono::{DateTime, NaiveDate, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Operational state of a sensor
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum SensorStatus {
    /// Reporting normally
    #[default]
    Active,
    /// Switched off
    Inactive,
    /// Under maintenance
    Maintenance,
    /// Reporting faults
    Error,
}

impl fmt::Display for SensorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SensorStatus::Active => "active",
            SensorStatus::Inactive => "inactive",
            SensorStatus::Maintenance => "maintenance",
            SensorStatus::Error => "error",
        };
        write!(f, "{s}")
    }
}

/// Water level classification against a sensor's thresholds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum LevelStatus {
    /// Below the warning threshold
    #[default]
    Normal,
    /// At or above the warning threshold
    Warning,
    /// At or above the critical threshold
    Critical,
}

impl LevelStatus {
    /// Classifies a level percentage against warning and critical thresholds (both in percent)
    #[must_use]
    pub fn classify(level_percentage: f64, warning_threshold: f64, critical_threshold: f64) -> Self {
        if level_percentage >= critical_threshold {
            LevelStatus::Critical
        } else if level_percentage >= warning_threshold {
            LevelStatus::Warning
        } else {
            LevelStatus::Normal
        }
    }
}

impl fmt::Display for LevelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LevelStatus::Normal => "normal",
            LevelStatus::Warning => "warning",
            LevelStatus::Critical => "critical",
        };
        write!(f, "{s}")
    }
}

/// Monitored river
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct River {
    /// River identifier
    pub id: i64,
    /// River name
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Latitude of the reference point
    pub latitude: f64,
    /// Longitude of the reference point
    pub longitude: f64,
    /// Number of active sensors on the river
    #[serde(default)]
    pub sensor_count: u32,
}

/// One measurement reported by a sensor
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct SensorReading {
    /// Reading identifier
    pub id: i64,
    /// Water level in metres
    pub water_level: f64,
    /// Water temperature in Celsius
    pub temperature: f64,
    /// Flow rate in m³/s
    pub flow_rate: f64,
    /// Battery level in percent
    pub battery_level: f64,
    /// Signal strength in dBm
    pub signal_strength: i32,
    /// Water level as a percentage of the sensor's maximum level
    #[serde(default)]
    pub level_percentage: f64,
    /// When the reading was taken
    pub timestamp: DateTime<Utc>,
}

/// Water level sensor
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sensor {
    /// Sensor identifier (UUID)
    pub id: String,
    /// Display name
    pub name: String,
    /// Short unique code painted on the station
    pub sensor_code: String,
    /// Identifier of the river the sensor is installed on
    pub river: i64,
    /// Name of the river the sensor is installed on
    #[serde(default)]
    pub river_name: String,
    /// Latitude of the station
    pub latitude: f64,
    /// Longitude of the station
    pub longitude: f64,
    /// Operational state
    pub status: SensorStatus,
    /// Installation date
    pub installation_date: NaiveDate,
    /// Date of the last maintenance visit
    #[serde(default)]
    pub last_maintenance: Option<NaiveDate>,
    /// Maximum measurable level in metres
    pub max_level: f64,
    /// Warning threshold in percent of `max_level`
    pub warning_threshold: f64,
    /// Critical threshold in percent of `max_level`
    pub critical_threshold: f64,
    /// Most recent reading
    #[serde(default)]
    pub current_reading: Option<SensorReading>,
    /// Most recent water level as a percentage of `max_level`
    #[serde(default)]
    pub current_level_percentage: f64,
    /// Classification of the most recent level
    #[serde(default)]
    pub alert_status: LevelStatus,
    /// Number of readings stored for this sensor
    #[serde(default)]
    pub readings_count: u64,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Sensor {
    /// Whether the sensor is reporting
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == SensorStatus::Active
    }

    /// Level classification computed from the current percentage and this sensor's thresholds
    #[must_use]
    pub fn level_status(&self) -> LevelStatus {
        LevelStatus::classify(
            self.current_level_percentage,
            self.warning_threshold,
            self.critical_threshold,
        )
    }

    /// Converts a water level in metres to a percentage of `max_level`, capped at 100
    #[must_use]
    pub fn level_percentage(&self, water_level: f64) -> f64 {
        if self.max_level > 0.0 {
            (water_level / self.max_level * 100.0).min(100.0)
        } else {
            0.0
        }
    }
}

/// Aggregated statistics for one sensor over a window of days
///
/// When the window holds no readings the server only sends `message`.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SensorStatistics {
    /// Mean water level in metres
    #[serde(default)]
    pub avg_level: Option<f64>,
    /// Highest water level in metres
    #[serde(default)]
    pub max_level: Option<f64>,
    /// Lowest water level in metres
    #[serde(default)]
    pub min_level: Option<f64>,
    /// Mean temperature in Celsius
    #[serde(default)]
    pub avg_temperature: Option<f64>,
    /// Mean flow rate in m³/s
    #[serde(default)]
    pub avg_flow_rate: Option<f64>,
    /// Number of readings in the window
    #[serde(default)]
    pub reading_count: Option<u64>,
    /// Mean level in percent of the sensor's maximum
    #[serde(default)]
    pub avg_level_percentage: Option<f64>,
    /// Highest level in percent of the sensor's maximum
    #[serde(default)]
    pub max_level_percentage: Option<f64>,
    /// Lowest level in percent of the sensor's maximum
    #[serde(default)]
    pub min_level_percentage: Option<f64>,
    /// Explanation sent instead of figures
    #[serde(default)]
    pub message: Option<String>,
}

impl SensorStatistics {
    /// Whether the window contained any reading
    #[must_use]
    pub fn has_data(&self) -> bool {
        self.reading_count.is_some_and(|count| count > 0)
    }
}

/// Overall health of the sensor network
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum SystemStatus {
    /// Every sensor is active
    #[default]
    Operational,
    /// At least one sensor is not active
    Degraded,
}

/// Figures shown at the top of the dashboard
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DashboardSummary {
    /// Number of sensors
    pub total_sensors: u32,
    /// Number of active sensors
    pub active_sensors: u32,
    /// Sensors at a critical level
    pub critical_count: u32,
    /// Sensors at a warning level
    pub warning_count: u32,
    /// Sensors at a normal level
    pub normal_count: u32,
    /// Mean level over the last hour, in percent
    pub average_level_percentage: f64,
    /// Network health
    pub system_status: SystemStatus,
}

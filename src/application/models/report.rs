use crate::error::AppError;
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kind of report
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    /// One day
    Daily,
    /// One week
    Weekly,
    /// One month
    Monthly,
    /// Arbitrary window
    Custom,
    /// Write-up of an incident
    Incident,
}

/// Generation state of a report
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    /// Queued
    #[default]
    Pending,
    /// Being generated
    Generating,
    /// Ready for download
    Completed,
    /// Generation failed, see `error_message`
    Failed,
}

/// Generated report
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct Report {
    /// Report identifier
    pub id: i64,
    /// Title
    pub title: String,
    /// Kind of report
    pub report_type: ReportType,
    /// Generation state
    #[serde(default)]
    pub status: ReportStatus,
    /// User who requested the report
    #[serde(default)]
    pub created_by: Option<i64>,
    /// Name of the user who requested the report
    #[serde(default)]
    pub created_by_name: Option<String>,
    /// Sensors covered by the report
    #[serde(default)]
    pub sensors: Vec<String>,
    /// Names of the sensors covered by the report
    #[serde(default)]
    pub sensor_names: Vec<String>,
    /// Rivers covered by the report
    #[serde(default)]
    pub rivers: Vec<i64>,
    /// Names of the rivers covered by the report
    #[serde(default)]
    pub river_names: Vec<String>,
    /// Start of the reporting window
    pub start_date: DateTime<Utc>,
    /// End of the reporting window
    pub end_date: DateTime<Utc>,
    /// Extra generation parameters
    #[serde(default)]
    pub parameters: Value,
    /// Location of the generated file on the server
    #[serde(default)]
    pub file_path: Option<String>,
    /// Request time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Completion time
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    /// Failure reason
    #[serde(default)]
    pub error_message: String,
}

impl Report {
    /// Whether the report file can be downloaded
    #[must_use]
    pub fn is_downloadable(&self) -> bool {
        self.status == ReportStatus::Completed && self.file_path.is_some()
    }
}

/// Body of `POST reports/reports/`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateReportRequest {
    /// Title
    pub title: String,
    /// Kind of report
    pub report_type: ReportType,
    /// Sensors to cover
    #[serde(default)]
    pub sensors: Vec<String>,
    /// Rivers to cover
    #[serde(default)]
    pub rivers: Vec<i64>,
    /// Start of the reporting window
    pub start_date: DateTime<Utc>,
    /// End of the reporting window
    pub end_date: DateTime<Utc>,
    /// Extra generation parameters
    pub parameters: Value,
}

impl CreateReportRequest {
    /// Creates a request for every sensor and river over `[start_date, end_date]`
    pub fn new(
        title: impl Into<String>,
        report_type: ReportType,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            report_type,
            sensors: Vec::new(),
            rivers: Vec::new(),
            start_date,
            end_date,
            parameters: Value::Object(Default::default()),
        }
    }

    /// Restricts the report to the given sensors
    #[must_use]
    pub fn with_sensors(mut self, sensors: Vec<String>) -> Self {
        self.sensors = sensors;
        self
    }

    /// Restricts the report to the given rivers
    #[must_use]
    pub fn with_rivers(mut self, rivers: Vec<i64>) -> Self {
        self.rivers = rivers;
        self
    }

    /// Sets the extra generation parameters
    #[must_use]
    pub fn with_parameters(mut self, parameters: Value) -> Self {
        self.parameters = parameters;
        self
    }

    /// Checks the request before it is sent
    pub fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().is_empty() {
            return Err(AppError::InvalidInput("report title is empty".to_string()));
        }
        if self.end_date < self.start_date {
            return Err(AppError::InvalidInput(
                "report end date is before its start date".to_string(),
            ));
        }
        Ok(())
    }
}

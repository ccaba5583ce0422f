/******************************************************************************
   Author: River Monitoring Authority
   Date: 16/10/26
******************************************************************************/

//! High-level client for the river monitoring API
//!
//! [`Client`] implements every service interface on top of the authenticated
//! [`HttpClient`]:
//!
//! ```ignore
//! use river_monitor_client::prelude::*;
//!
//! let client = Client::from_env().await?;
//! client.login("operator", "secret").await?;
//!
//! for sensor in client.get_sensors().await? {
//!     info!("{} at {:.1}%", sensor.name, sensor.current_level_percentage);
//! }
//! ```

use crate::application::config::Config;
use crate::application::interfaces::alert::AlertService;
use crate::application::interfaces::report::ReportService;
use crate::application::interfaces::sensor::SensorService;
use crate::application::interfaces::user::UserService;
use crate::application::models::{
    Alert, AlertSummary, CreateReportRequest, DashboardSummary, ListResponse, Report, Sensor,
    SensorReading, SensorStatistics, User,
};
use crate::constants::{DEFAULT_READINGS_HOURS, DEFAULT_STATISTICS_DAYS};
use crate::error::AppError;
use crate::model::auth::TokenPair;
use crate::model::http::HttpClient;
use crate::storage::TokenStore;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// River monitoring API client
#[derive(Clone)]
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a client whose tokens live in memory, or in `storage.token_file` when set
    pub async fn new(config: Config) -> Result<Self, AppError> {
        let http_client = HttpClient::new(config).await?;
        Ok(Self::from_http_client(Arc::new(http_client)))
    }

    /// Creates a client from the environment, see [`Config::new`]
    pub async fn from_env() -> Result<Self, AppError> {
        Self::new(Config::new()).await
    }

    /// Creates a client on top of an explicit token store
    pub fn with_store(config: Config, store: Arc<dyn TokenStore>) -> Result<Self, AppError> {
        let http_client = HttpClient::with_store(config, store)?;
        Ok(Self::from_http_client(Arc::new(http_client)))
    }

    /// Wraps an existing HTTP client
    pub fn from_http_client(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Underlying HTTP client, for endpoints without a typed wrapper
    pub fn http(&self) -> &HttpClient {
        &self.http_client
    }

    /// Logs in and stores the session tokens
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenPair, AppError> {
        self.http_client.login(username, password).await
    }

    /// Logs in with the configured credentials
    pub async fn login_with_config(&self) -> Result<TokenPair, AppError> {
        self.http_client.auth().login_with_config().await
    }

    /// Clears the session tokens
    pub async fn logout(&self) -> Result<(), AppError> {
        self.http_client.logout().await
    }

    /// Whether an access token is currently held
    pub async fn is_authenticated(&self) -> bool {
        self.http_client.auth().is_authenticated().await
    }

    async fn get_list<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, AppError> {
        let list: ListResponse<T> = self.http_client.get(path).await?;
        if list.has_next() {
            debug!("{} has more pages, returning the first one", path);
        }
        Ok(list.into_vec())
    }
}

fn check_sensor_id(sensor_id: &str) -> Result<&str, AppError> {
    let sensor_id = sensor_id.trim();
    if sensor_id.is_empty() {
        return Err(AppError::InvalidInput("sensor id is empty".to_string()));
    }
    // ids are UUIDs; anything else could rewrite the request path
    if !sensor_id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return Err(AppError::InvalidInput(format!(
            "sensor id {sensor_id:?} contains invalid characters"
        )));
    }
    Ok(sensor_id)
}

fn check_window(name: &str, value: u32) -> Result<u32, AppError> {
    if value == 0 {
        return Err(AppError::InvalidInput(format!("{name} must be positive")));
    }
    Ok(value)
}

#[async_trait]
impl SensorService for Client {
    async fn get_sensors(&self) -> Result<Vec<Sensor>, AppError> {
        info!("Getting sensors");
        let sensors: Vec<Sensor> = self.get_list("sensors/sensors/").await?;
        debug!("Sensors obtained: {}", sensors.len());
        Ok(sensors)
    }

    async fn get_sensor(&self, sensor_id: &str) -> Result<Sensor, AppError> {
        let sensor_id = check_sensor_id(sensor_id)?;
        let path = format!("sensors/sensors/{sensor_id}/");
        info!("Getting sensor: {}", sensor_id);
        self.http_client.get(&path).await
    }

    async fn get_sensor_readings(
        &self,
        sensor_id: &str,
        hours: Option<u32>,
    ) -> Result<Vec<SensorReading>, AppError> {
        let sensor_id = check_sensor_id(sensor_id)?;
        let hours = check_window("hours", hours.unwrap_or(DEFAULT_READINGS_HOURS))?;
        let path = format!("sensors/sensors/{sensor_id}/readings/?hours={hours}");
        info!("Getting readings of sensor {} for the last {}h", sensor_id, hours);
        let readings: Vec<SensorReading> = self.get_list(&path).await?;
        debug!("Readings obtained: {}", readings.len());
        Ok(readings)
    }

    async fn get_sensor_statistics(
        &self,
        sensor_id: &str,
        days: Option<u32>,
    ) -> Result<SensorStatistics, AppError> {
        let sensor_id = check_sensor_id(sensor_id)?;
        let days = check_window("days", days.unwrap_or(DEFAULT_STATISTICS_DAYS))?;
        let path = format!("sensors/sensors/{sensor_id}/statistics/?days={days}");
        info!("Getting statistics of sensor {} for the last {} days", sensor_id, days);
        self.http_client.get(&path).await
    }

    async fn get_dashboard_summary(&self) -> Result<DashboardSummary, AppError> {
        info!("Getting dashboard summary");
        self.http_client
            .get("sensors/sensors/dashboard_summary/")
            .await
    }

    async fn get_latest_readings(&self) -> Result<Vec<SensorReading>, AppError> {
        info!("Getting latest readings");
        self.get_list("sensors/readings/latest/").await
    }
}

#[async_trait]
impl AlertService for Client {
    async fn get_alerts(&self) -> Result<Vec<Alert>, AppError> {
        info!("Getting alerts");
        let alerts: Vec<Alert> = self.get_list("alerts/alerts/").await?;
        debug!("Alerts obtained: {}", alerts.len());
        Ok(alerts)
    }

    async fn get_active_alerts(&self) -> Result<Vec<Alert>, AppError> {
        info!("Getting active alerts");
        self.get_list("alerts/alerts/active/").await
    }

    async fn get_alerts_summary(&self) -> Result<AlertSummary, AppError> {
        info!("Getting alerts summary");
        self.http_client.get("alerts/alerts/summary/").await
    }

    async fn acknowledge_alert(&self, alert_id: i64) -> Result<Alert, AppError> {
        info!("Acknowledging alert: {}", alert_id);
        let path = format!("alerts/alerts/{alert_id}/acknowledge/");
        self.http_client.post_empty(&path).await
    }

    async fn resolve_alert(&self, alert_id: i64) -> Result<Alert, AppError> {
        info!("Resolving alert: {}", alert_id);
        let path = format!("alerts/alerts/{alert_id}/resolve/");
        self.http_client.post_empty(&path).await
    }
}

#[async_trait]
impl UserService for Client {
    async fn get_current_user(&self) -> Result<User, AppError> {
        debug!("Getting current user");
        self.http_client.get("users/users/me/").await
    }

    async fn get_users(&self) -> Result<Vec<User>, AppError> {
        info!("Getting users");
        self.get_list("users/users/").await
    }
}

#[async_trait]
impl ReportService for Client {
    async fn get_reports(&self) -> Result<Vec<Report>, AppError> {
        info!("Getting reports");
        self.get_list("reports/reports/").await
    }

    async fn create_report(&self, request: &CreateReportRequest) -> Result<Report, AppError> {
        request.validate()?;
        info!("Creating {:?} report: {}", request.report_type, request.title);
        self.http_client.post("reports/reports/", request).await
    }

    async fn download_report(&self, report_id: i64) -> Result<Vec<u8>, AppError> {
        info!("Downloading report: {}", report_id);
        let path = format!("reports/reports/{report_id}/download/");
        self.http_client.get_bytes(&path).await
    }
}

use crate::application::models::{Alert, AlertSummary};
use crate::error::AppError;
use async_trait::async_trait;

/// Interface for the alert service
#[async_trait]
pub trait AlertService: Send + Sync {
    /// Gets every alert, newest first
    async fn get_alerts(&self) -> Result<Vec<Alert>, AppError>;

    /// Gets the alerts that are still active
    async fn get_active_alerts(&self) -> Result<Vec<Alert>, AppError>;

    /// Gets the alert counters
    async fn get_alerts_summary(&self) -> Result<AlertSummary, AppError>;

    /// Acknowledges an active alert and returns its new state
    async fn acknowledge_alert(&self, alert_id: i64) -> Result<Alert, AppError>;

    /// Resolves an alert and returns its new state
    async fn resolve_alert(&self, alert_id: i64) -> Result<Alert, AppError>;
}

use crate::application::models::{DashboardSummary, Sensor, SensorReading, SensorStatistics};
use crate::error::AppError;
use async_trait::async_trait;

/// Interface for the sensor service
#[async_trait]
pub trait SensorService: Send + Sync {
    /// Gets every sensor with its latest reading
    async fn get_sensors(&self) -> Result<Vec<Sensor>, AppError>;

    /// Gets one sensor
    ///
    /// # Arguments
    /// * `sensor_id` - Sensor UUID
    async fn get_sensor(&self, sensor_id: &str) -> Result<Sensor, AppError>;

    /// Gets the readings of a sensor over the last `hours` hours
    ///
    /// # Arguments
    /// * `sensor_id` - Sensor UUID
    /// * `hours` - Size of the look-back window, must be positive. `None` means 24 hours
    async fn get_sensor_readings(
        &self,
        sensor_id: &str,
        hours: Option<u32>,
    ) -> Result<Vec<SensorReading>, AppError>;

    /// Gets aggregated statistics of a sensor over the last `days` days, 7 when `None`
    async fn get_sensor_statistics(
        &self,
        sensor_id: &str,
        days: Option<u32>,
    ) -> Result<SensorStatistics, AppError>;

    /// Gets the dashboard summary
    async fn get_dashboard_summary(&self) -> Result<DashboardSummary, AppError>;

    /// Gets the latest reading of every active sensor
    async fn get_latest_readings(&self) -> Result<Vec<SensorReading>, AppError>;
}

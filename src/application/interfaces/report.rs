use crate::application::models::{CreateReportRequest, Report};
use crate::error::AppError;
use async_trait::async_trait;

/// Interface for the report service
#[async_trait]
pub trait ReportService: Send + Sync {
    /// Gets every report, newest first
    async fn get_reports(&self) -> Result<Vec<Report>, AppError>;

    /// Requests a new report
    ///
    /// The request is validated locally before it is sent.
    async fn create_report(&self, request: &CreateReportRequest) -> Result<Report, AppError>;

    /// Downloads the file of a completed report
    async fn download_report(&self, report_id: i64) -> Result<Vec<u8>, AppError>;
}

use crate::common::create_logged_in_client;
use assert_json_diff::assert_json_include;
use chrono::{TimeZone, Utc};
use mockito::{Matcher, Server};
use river_monitor_client::prelude::*;
use serde_json::json;

fn report_body(id: i64, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": "Reporte semanal Trancura",
        "report_type": "weekly",
        "status": status,
        "created_by": 1,
        "created_by_name": "Ana Pérez",
        "sensors": ["4f1c2a7e-9d1b-4c55-8a0e-3b7f0c9d2e11"],
        "sensor_names": ["Puente Trancura (TRC-01)"],
        "rivers": [],
        "river_names": [],
        "start_date": "2025-05-25T00:00:00Z",
        "end_date": "2025-06-01T00:00:00Z",
        "parameters": {},
        "file_path": null,
        "created_at": "2025-06-01T08:00:00Z",
        "completed_at": null,
        "error_message": ""
    })
}

#[tokio::test]
async fn test_get_reports() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/reports/reports/")
        .with_status(200)
        .with_body(json!([report_body(5, "completed")]).to_string())
        .create_async()
        .await;

    let (client, _store) = create_logged_in_client(&server, "A1", "R1").await;
    let reports = client.get_reports().await.unwrap();

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].report_type, ReportType::Weekly);
    assert_eq!(reports[0].status, ReportStatus::Completed);
    assert!(!reports[0].is_downloadable());
}

#[tokio::test]
async fn test_create_report_posts_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/reports/reports/")
        .match_header("authorization", "Bearer A1")
        .match_body(Matcher::PartialJson(json!({
            "title": "Reporte semanal Trancura",
            "report_type": "weekly",
            "sensors": ["4f1c2a7e-9d1b-4c55-8a0e-3b7f0c9d2e11"]
        })))
        .with_status(201)
        .with_body(report_body(6, "pending").to_string())
        .expect(1)
        .create_async()
        .await;

    let request = CreateReportRequest::new(
        "Reporte semanal Trancura",
        ReportType::Weekly,
        Utc.with_ymd_and_hms(2025, 5, 25, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
    )
    .with_sensors(vec!["4f1c2a7e-9d1b-4c55-8a0e-3b7f0c9d2e11".to_string()]);

    let (client, _store) = create_logged_in_client(&server, "A1", "R1").await;
    let report = client.create_report(&request).await.unwrap();

    assert_eq!(report.id, 6);
    assert_json_include!(
        actual: serde_json::to_value(&report).unwrap(),
        expected: json!({"status": "pending", "report_type": "weekly"})
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_invalid_report_is_rejected_locally() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/reports/reports/")
        .expect(0)
        .create_async()
        .await;

    let request = CreateReportRequest::new(
        "Reporte invertido",
        ReportType::Custom,
        Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap(),
    );

    let (client, _store) = create_logged_in_client(&server, "A1", "R1").await;
    let err = client.create_report(&request).await.unwrap_err();

    assert!(matches!(err, AppError::InvalidInput(_)));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_download_report_returns_bytes() {
    let mut server = Server::new_async().await;
    let pdf = b"%PDF-1.4\n%\xe2\xe3\xcf\xd3\n".to_vec();
    let mock = server
        .mock("GET", "/reports/reports/5/download/")
        .match_header("authorization", "Bearer A1")
        .with_status(200)
        .with_header("content-type", "application/pdf")
        .with_body(pdf.clone())
        .expect(1)
        .create_async()
        .await;

    let (client, _store) = create_logged_in_client(&server, "A1", "R1").await;
    let bytes = client.download_report(5).await.unwrap();

    assert_eq!(bytes, pdf);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_download_report_recovers_from_expired_token() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/reports/reports/5/download/")
        .match_header("authorization", "Bearer A1")
        .with_status(401)
        .create_async()
        .await;
    server
        .mock("POST", "/auth/refresh/")
        .with_status(200)
        .with_body(r#"{"access": "A2"}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/reports/reports/5/download/")
        .match_header("authorization", "Bearer A2")
        .with_status(200)
        .with_body("csv,data\n1,2\n")
        .create_async()
        .await;

    let (client, _store) = create_logged_in_client(&server, "A1", "R1").await;
    let bytes = client.download_report(5).await.unwrap();

    assert_eq!(bytes, b"csv,data\n1,2\n");
}

#[tokio::test]
async fn test_download_missing_report_is_http_404() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/reports/reports/99/download/")
        .with_status(404)
        .with_body(r#"{"error": "Report file not available"}"#)
        .create_async()
        .await;

    let (client, _store) = create_logged_in_client(&server, "A1", "R1").await;
    let err = client.download_report(99).await.unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
}

use river_monitor_client::application::models::{Alert, Sensor};
use river_monitor_client::presentation::{AlertCounts, AlertTable, SensorTable};
use serde_json::json;

fn alert(id: i64, severity: &str, status: &str, created_at: &str) -> Alert {
    serde_json::from_value(json!({
        "id": id,
        "sensor": "s-1",
        "sensor_name": "Puente Trancura",
        "river_name": "Río Trancura",
        "severity": severity,
        "status": status,
        "title": format!("Alerta {id}"),
        "message": "Nivel elevado",
        "created_at": created_at
    }))
    .unwrap()
}

fn sensor(name: &str, code: &str, level_percentage: f64) -> Sensor {
    serde_json::from_value(json!({
        "id": code,
        "name": name,
        "sensor_code": code,
        "river": 1,
        "river_name": "Río Trancura",
        "latitude": -39.27,
        "longitude": -71.97,
        "status": "active",
        "installation_date": "2023-05-10",
        "max_level": 5.0,
        "warning_threshold": 75.0,
        "critical_threshold": 90.0,
        "current_level_percentage": level_percentage
    }))
    .unwrap()
}

#[test]
fn test_alert_counts() {
    let alerts = vec![
        alert(1, "critical", "active", "2025-06-01T10:00:00Z"),
        alert(2, "warning", "active", "2025-06-01T11:00:00Z"),
        alert(3, "info", "active", "2025-06-01T12:00:00Z"),
        alert(4, "critical", "acknowledged", "2025-06-01T09:00:00Z"),
        alert(5, "warning", "resolved", "2025-05-31T09:00:00Z"),
    ];

    let counts = AlertCounts::from_alerts(&alerts);

    assert_eq!(
        counts,
        AlertCounts {
            total: 5,
            active: 3,
            critical: 1,
            warning: 1,
            acknowledged: 1,
        }
    );
    assert_eq!(AlertCounts::from_alerts(&[]), AlertCounts::default());
}

#[test]
fn test_alert_table_puts_most_severe_first() {
    let alerts = vec![
        alert(1, "info", "active", "2025-06-01T12:00:00Z"),
        alert(2, "critical", "active", "2025-06-01T10:00:00Z"),
    ];

    let rendered = AlertTable(&alerts).to_string();
    let critical = rendered.find("Alerta 2").unwrap();
    let info = rendered.find("Alerta 1").unwrap();

    assert!(rendered.contains("SEVERITY"));
    assert!(critical < info);
    assert!(rendered.contains("2025-06-01 10:00"));
}

#[test]
fn test_sensor_table_sorted_by_name_with_missing_readings() {
    let sensors = vec![
        sensor("Puente Trancura", "TRC-01", 92.0),
        sensor("Estación Liucura", "LIU-02", 40.0),
    ];

    let rendered = SensorTable(&sensors).to_string();
    let liucura = rendered.find("LIU-02").unwrap();
    let trancura = rendered.find("TRC-01").unwrap();

    assert!(liucura < trancura);
    assert!(rendered.contains("critical"));
    assert!(rendered.contains("normal"));
    assert!(rendered.contains(" - "));
}

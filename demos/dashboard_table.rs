use river_monitor_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let client = Client::from_env().await?;
    if !client.is_authenticated().await {
        client.login_with_config().await?;
    }

    let sensors = client.get_sensors().await?;
    println!("{}", SensorTable(&sensors));

    let alerts = client.get_active_alerts().await?;
    let counts = AlertCounts::from_alerts(&alerts);
    info!(
        "{} active alerts ({} critical, {} warning)",
        counts.active, counts.critical, counts.warning
    );
    println!("{}", AlertTable(&alerts));

    for alert in alerts.iter().filter(|a| a.severity == AlertSeverity::Critical) {
        if let Some(sensor) = sensors.iter().find(|s| s.id == alert.sensor) {
            let stats = client
                .get_sensor_statistics(&sensor.id, None)
                .await?;
            info!(
                "{}: max level {:?}% over the last {} days",
                sensor.name, stats.max_level_percentage, DEFAULT_STATISTICS_DAYS
            );
        }
    }

    Ok(())
}

use river_monitor_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();
    info!("Starting simple client example");

    let config = Config::new();
    info!("Using API at {}", config.rest_api.base_url);

    let client = Client::new(config).await?;
    if !client.is_authenticated().await {
        info!("No stored session, logging in...");
        client.login_with_config().await?;
    }
    info!("✓ Client authenticated");

    let user = client.get_current_user().await?;
    info!("Logged in as {} ({})", user.display_name(), user.role);

    let summary = client.get_dashboard_summary().await?;
    info!("Dashboard summary: {}", summary);

    let alerts = client.get_alerts_summary().await?;
    info!(
        "{} active alerts, {} critical",
        alerts.active_alerts, alerts.critical_alerts
    );

    Ok(())
}

use river_monitor_client::application::config::Config;
use river_monitor_client::constants::DEFAULT_BASE_URL;
use river_monitor_client::utils::config::{get_env_or_default, get_env_or_none};
use std::path::PathBuf;

#[test]
fn test_url_for_joins_with_single_slash() {
    let config = Config::with_base_url("http://localhost:8000/api/");
    assert_eq!(
        config.url_for("/sensors/sensors/"),
        "http://localhost:8000/api/sensors/sensors/"
    );
    assert_eq!(
        config.url_for("alerts/alerts/summary/"),
        "http://localhost:8000/api/alerts/alerts/summary/"
    );
}

#[test]
fn test_url_for_keeps_absolute_urls() {
    let config = Config::with_base_url(DEFAULT_BASE_URL);
    let next_page = "http://localhost:8000/api/sensors/sensors/?page=2";
    assert_eq!(config.url_for(next_page), next_page);
}

#[test]
fn test_with_base_url_defaults() {
    let config = Config::with_base_url("http://monitor.local/api")
        .with_credentials("operador", "clave")
        .with_token_file("/tmp/river/tokens.json");

    assert_eq!(config.rest_api.base_url, "http://monitor.local/api");
    assert_eq!(config.credentials.username, "operador");
    assert_eq!(
        config.storage.token_file,
        Some(PathBuf::from("/tmp/river/tokens.json"))
    );
}

#[test]
fn test_config_display_hides_password() {
    let config = Config::with_base_url(DEFAULT_BASE_URL).with_credentials("operador", "s3cr3t");
    let rendered = config.to_string();

    assert!(rendered.contains("operador"));
    assert!(!rendered.contains("s3cr3t"));
}

#[test]
fn test_env_helpers_fall_back_when_unset() {
    let var = "RIVER_MONITOR_TEST_SURELY_UNSET_VARIABLE";
    assert_eq!(get_env_or_default(var, 42u32), 42);
    assert_eq!(get_env_or_none::<u32>(var), None);
}

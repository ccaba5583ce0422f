/******************************************************************************
   Author: River Monitoring Authority
   Date: 16/10/26
******************************************************************************/
use std::env;
use std::sync::Once;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Installs the global `tracing` subscriber
///
/// The level is read from `LOGLEVEL` (`TRACE`, `DEBUG`, `INFO`, `WARN`, `ERROR`,
/// case-insensitive) and defaults to `INFO`. Calling it more than once is a no-op,
/// as is calling it after another subscriber was installed.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = log_level_from_env();

        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_target(false)
            .finish();

        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            debug!("Log level set to: {}", level);
        }
    });
}

fn log_level_from_env() -> Level {
    let raw = env::var("LOGLEVEL").unwrap_or_else(|_| "INFO".to_string());
    parse_level(&raw)
}

pub(crate) fn parse_level(raw: &str) -> Level {
    match raw.trim().to_uppercase().as_str() {
        "TRACE" => Level::TRACE,
        "DEBUG" => Level::DEBUG,
        "WARN" | "WARNING" => Level::WARN,
        "ERROR" => Level::ERROR,
        _ => Level::INFO,
    }
}

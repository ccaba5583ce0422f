/// Alert tables and counters
pub mod alert;
/// Sensor tables
pub mod sensor;

pub use alert::{AlertCounts, AlertTable};
pub use sensor::SensorTable;

/// Placeholder for values the API did not send
pub(crate) const MISSING: &str = "-";

/// Shortens `text` to at most `max` characters, marking the cut with `...`
pub(crate) fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}

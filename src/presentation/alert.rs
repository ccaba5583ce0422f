use crate::application::models::{Alert, AlertSeverity, AlertState};
use crate::presentation::truncate;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use prettytable::format;
use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Box table of alerts, most severe first, then newest first
pub struct AlertTable<'a>(pub &'a [Alert]);

impl fmt::Display for AlertTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        table.add_row(Row::new(vec![
            Cell::new("ID"),
            Cell::new("SEVERITY"),
            Cell::new("STATUS"),
            Cell::new("SENSOR"),
            Cell::new("RIVER"),
            Cell::new("TITLE"),
            Cell::new("RAISED"),
        ]));

        let mut sorted: Vec<&Alert> = self.0.iter().collect();
        sorted.sort_by(|a, b| {
            b.severity
                .cmp(&a.severity)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });

        for alert in sorted {
            table.add_row(Row::new(vec![
                Cell::new(&alert.id.to_string()),
                Cell::new(&alert.severity.to_string()),
                Cell::new(&alert.status.to_string()),
                Cell::new(&truncate(&alert.sensor_name, 25)),
                Cell::new(&alert.river_name),
                Cell::new(&truncate(&alert.title, 40)),
                Cell::new(&alert.created_at.format("%Y-%m-%d %H:%M").to_string()),
            ]));
        }

        write!(f, "{}", table)
    }
}

/// Counters shown above the alert list, derived from the alerts themselves
#[derive(DebugPretty, DisplaySimple, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AlertCounts {
    /// All alerts
    pub total: usize,
    /// Alerts in the active state
    pub active: usize,
    /// Active alerts with critical severity
    pub critical: usize,
    /// Active alerts with warning severity
    pub warning: usize,
    /// Alerts in the acknowledged state
    pub acknowledged: usize,
}

impl AlertCounts {
    /// Counts `alerts` by state and severity
    pub fn from_alerts(alerts: &[Alert]) -> Self {
        alerts.iter().fold(Self::default(), |mut counts, alert| {
            counts.total += 1;
            match alert.status {
                AlertState::Active => {
                    counts.active += 1;
                    match alert.severity {
                        AlertSeverity::Critical => counts.critical += 1,
                        AlertSeverity::Warning => counts.warning += 1,
                        AlertSeverity::Info => {}
                    }
                }
                AlertState::Acknowledged => counts.acknowledged += 1,
                AlertState::Resolved => {}
            }
            counts
        })
    }
}

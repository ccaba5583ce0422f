use crate::application::models::Sensor;
use crate::presentation::{MISSING, truncate};
use prettytable::format;
use prettytable::{Cell, Row, Table};
use std::fmt;

/// Box table of sensors, one row per sensor, sorted by name
pub struct SensorTable<'a>(pub &'a [Sensor]);

impl fmt::Display for SensorTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        table.add_row(Row::new(vec![
            Cell::new("SENSOR"),
            Cell::new("CODE"),
            Cell::new("RIVER"),
            Cell::new("STATUS"),
            Cell::new("LEVEL (m)"),
            Cell::new("LEVEL %"),
            Cell::new("TEMP (°C)"),
            Cell::new("FLOW (m³/s)"),
            Cell::new("ALERT"),
        ]));

        let mut sorted: Vec<&Sensor> = self.0.iter().collect();
        sorted.sort_by_key(|s| s.name.to_lowercase());

        for sensor in sorted {
            let reading = sensor.current_reading.as_ref();
            let level = reading
                .map(|r| format!("{:.2}", r.water_level))
                .unwrap_or_else(|| MISSING.to_string());
            let temperature = reading
                .map(|r| format!("{:.1}", r.temperature))
                .unwrap_or_else(|| MISSING.to_string());
            let flow = reading
                .map(|r| format!("{:.1}", r.flow_rate))
                .unwrap_or_else(|| MISSING.to_string());

            table.add_row(Row::new(vec![
                Cell::new(&truncate(&sensor.name, 30)),
                Cell::new(&sensor.sensor_code),
                Cell::new(&sensor.river_name),
                Cell::new(&sensor.status.to_string()),
                Cell::new(&level),
                Cell::new(&format!("{:.1}", sensor.current_level_percentage)),
                Cell::new(&temperature),
                Cell::new(&flow),
                Cell::new(&sensor.level_status().to_string()),
            ]));
        }

        write!(f, "{}", table)
    }
}

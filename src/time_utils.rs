use chrono::{DateTime, TimeZone, Utc};
use std::fmt::Display;

/// Format timestamp according to zoom level using UTC components.
///
/// - `zoom >= 2.0` -> `HH:MM`
/// - `1.0 <= zoom < 2.0` -> `DD.MM`
/// - `zoom < 1.0` -> `MM.YYYY`
pub fn format_time_label(timestamp: u64, zoom: f64) -> String {
    let date = DateTime::<Utc>::from_timestamp_millis(timestamp as i64).unwrap_or_default();
    if zoom >= 2.0 {
        date.format("%H:%M").to_string()
    } else if zoom >= 1.0 {
        date.format("%d.%m").to_string()
    } else {
        date.format("%m.%Y").to_string()
    }
}

/// Footer caption: `Last updated: 2024-05-01 12:30:00`
pub fn last_updated_caption<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    format!("Last updated: {}", now.format("%Y-%m-%d %H:%M:%S"))
}

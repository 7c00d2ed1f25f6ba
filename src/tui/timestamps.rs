use std::time::Duration;

use chrono::{DateTime, Local};

/// Format the wall-clock time of the last refresh: "14:05:09"
pub fn format_refreshed_at(timestamp: &DateTime<Local>) -> String {
    timestamp.format("%H:%M:%S").to_string()
}

/// Format the time left until the next refresh:
/// - "45s" under a minute
/// - "4m 59s" under an hour
/// - "2h 05m" beyond
pub fn format_countdown(remaining: Duration) -> String {
    let seconds = remaining.as_secs();
    let minutes = seconds / 60;
    let hours = minutes / 60;

    if hours > 0 {
        format!("{}h {:02}m", hours, minutes % 60)
    } else if minutes > 0 {
        format!("{}m {:02}s", minutes, seconds % 60)
    } else {
        format!("{}s", seconds)
    }
}

/// Format a refresh cadence: "every 5m", "every 30s"
pub fn format_interval(interval: Duration) -> String {
    let seconds = interval.as_secs();
    if seconds >= 60 && seconds % 60 == 0 {
        format!("every {}m", seconds / 60)
    } else {
        format!("every {}s", seconds)
    }
}

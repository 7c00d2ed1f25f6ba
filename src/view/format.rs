//! Number and duration formatting for the panel and the history table.
//!
//! # Rounding
//!
//! Freed-space values are shown with exactly one decimal digit. The value is scaled
//! by ten and rounded half away from zero (`f64::round`), so `12.34` shows as
//! `12.3`, `0.25` as `0.3` and `10` as `10.0`. The cleaner already rounds what it
//! logs to one decimal, so this only matters for sums and hand-edited logs.

use crate::models::ItemStatus;

const MB_PER_GB: f64 = 1024.0;

/// Round a megabyte value to one decimal, half away from zero
pub fn round_one_decimal(mb: f64) -> f64 {
    (mb * 10.0).round() / 10.0
}

/// Format a freed-space value as `"12.3 MB"`
pub fn format_mb(mb: f64) -> String {
    format!("{:.1} MB", round_one_decimal(mb))
}

/// Format a size, switching to gigabytes from 1024 MB on (`"1.5 GB"`)
pub fn format_size_mb(mb: f64) -> String {
    if mb >= MB_PER_GB {
        format!("{:.1} GB", round_one_decimal(mb / MB_PER_GB))
    } else {
        format_mb(mb)
    }
}

/// Format an item size the way the cleaner logged it: `1` stays `1`, `12.5` stays `12.5`
pub fn format_item_size(mb: f64) -> String {
    mb.to_string()
}

/// Format how long a folder sat unused before the run found it
pub fn format_unused_hours(hours: u64) -> String {
    const DAY: u64 = 24;
    const WEEK: u64 = 7 * DAY;
    const MONTH: u64 = 30 * DAY;

    match hours {
        h if h < DAY => format!("{} h", h),
        h if h < WEEK => plural(h / DAY, "1 day", "days"),
        h if h < MONTH => plural(h / WEEK, "1 week", "weeks"),
        h => {
            let months = h / MONTH;
            if months == 1 { "~1 month".to_string() } else { format!("~{} months", months) }
        }
    }
}

fn plural(count: u64, one: &str, many: &str) -> String {
    if count == 1 { one.to_string() } else { format!("{} {}", count, many) }
}

/// Marker shown in front of an item line
pub fn item_marker(status: ItemStatus) -> &'static str {
    match status {
        ItemStatus::Deleted => "✅",
        ItemStatus::Failed => "⚠",
        ItemStatus::Inspected => "👁",
    }
}

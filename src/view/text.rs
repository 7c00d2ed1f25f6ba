//! Plain-text renderings of the status panel and the run history.

use super::format::{
    format_item_size, format_mb, format_size_mb, format_unused_hours, item_marker,
};
use crate::models::{DisplayItem, PanelSummary, RunRecord, RunStatus, ViewModel};
use crate::utils::{shorten_home, strip_ansi_codes};

pub const PANEL_TITLE: &str = "🧹 DevCleaner";
pub const EMPTY_PANEL_MESSAGE: &str = "No data yet. Run the cleaner first.";
pub const EMPTY_HISTORY_MESSAGE: &str = "No history yet. After a cleanup, it will show here.";
pub const UNKNOWN_TIMESTAMP: &str = "unknown";

/// Default number of runs listed by the history table
pub const DEFAULT_HISTORY_LIMIT: usize = 25;

const LABEL_WIDTH: usize = 18;
const DIVIDER_WIDTH: usize = 36;

/// Label/value rows of the panel, shared with the terminal dashboard
pub fn summary_rows(summary: &PanelSummary) -> [(&'static str, String); 4] {
    [
        ("Last run", display_timestamp(&summary.last_run)),
        ("Items processed", summary.items_processed().to_string()),
        ("Space freed", format_mb(summary.last_run.total_freed_mb)),
        ("Lifetime total", format_mb(summary.lifetime_freed_mb)),
    ]
}

/// One line per displayed item: `"👁 ~/app/node_modules (12.5MB)"`
pub fn item_line(item: &DisplayItem) -> String {
    format!(
        "{} {} ({}MB)",
        item_marker(item.status),
        strip_ansi_codes(&item.path),
        format_item_size(item.size_mb)
    )
}

pub fn overflow_line(overflow_count: usize) -> String {
    format!("... and {} more", overflow_count)
}

/// Sanitized timestamp of a run, or `unknown` when the cleaner did not log one
pub fn display_timestamp(run: &RunRecord) -> String {
    run.timestamp
        .as_deref()
        .map(|ts| strip_ansi_codes(ts).into_owned())
        .unwrap_or_else(|| UNKNOWN_TIMESTAMP.to_string())
}

/// Render the status panel as plain text
pub fn render_panel(view: &ViewModel) -> String {
    let Some(summary) = view.summary() else {
        return format!("{}\n{}\n", PANEL_TITLE, EMPTY_PANEL_MESSAGE);
    };

    let mut lines = vec![format!("{}  [{}]", PANEL_TITLE, summary.status().badge())];
    for (label, value) in summary_rows(summary) {
        lines.push(format!("{:<width$}{}", label, value, width = LABEL_WIDTH));
    }

    if !summary.displayed_items.is_empty() {
        lines.push("─".repeat(DIVIDER_WIDTH));
        lines.extend(summary.displayed_items.iter().map(item_line));
        if summary.overflow_count > 0 {
            lines.push(overflow_line(summary.overflow_count));
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn run_type_label(status: RunStatus) -> &'static str {
    match status {
        RunStatus::DryRun => "dry run",
        RunStatus::Cleanup => "cleanup",
    }
}

/// Render up to `limit` runs as a table, newest first, with a lifetime caption
///
/// With `verbose`, each run is followed by its items (path, size, idle time and
/// any deletion error).
pub fn render_history_table(
    history: &[RunRecord],
    home_dir: &str,
    limit: usize,
    verbose: bool,
) -> String {
    if history.is_empty() {
        return format!("{}\n", EMPTY_HISTORY_MESSAGE);
    }

    let mut lines = vec![
        format!("{:<20}  {:<8}  {:>6}  {:>10}", "Date", "Type", "Items", "Freed"),
        "─".repeat(50),
    ];

    for run in history.iter().take(limit) {
        lines.push(format!(
            "{:<20}  {:<8}  {:>6}  {:>10}",
            display_timestamp(run),
            run_type_label(run.status()),
            run.items_processed(),
            format_size_mb(run.total_freed_mb)
        ));

        if verbose {
            for item in &run.results {
                // Same order as the panel: shorten the logged path, then sanitize
                let path = strip_ansi_codes(&shorten_home(&item.path, home_dir)).into_owned();
                let idle = item
                    .unused_hours
                    .map(|h| format!(", {}", format_unused_hours(h)))
                    .unwrap_or_default();
                let mut line = format!(
                    "    {} {} ({}MB{})",
                    item_marker(item.status()),
                    path,
                    format_item_size(item.size_mb),
                    idle
                );
                if let Some(error) = &item.error {
                    line.push_str(&format!(": {}", strip_ansi_codes(error)));
                }
                lines.push(line);
            }
        }
    }

    if history.len() > limit {
        lines.push(format!("... {} older runs not shown", history.len() - limit));
    }

    lines.push(String::new());
    lines.push(format!(
        "Total freed: {} ({} runs)",
        format_size_mb(super::builder::lifetime_freed_mb(history)),
        history.len()
    ));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

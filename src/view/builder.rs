//! View model builder for the status panel.
//!
//! # Error Handling Strategy
//!
//! [`build`] is total: it never fails and never panics. A dashboard refreshing in the
//! background must keep showing something, so every problem with the log (missing
//! file upstream, truncated write, wrong shape) collapses into [`ViewModel::Empty`]
//! and the panel shows its neutral "no data yet" message. The parse error is logged
//! at `debug` level and dropped.
//!
//! The builder holds no state: each call is an independent function of the raw text
//! and the home directory, so repeated or concurrent refreshes over the same input
//! give identical results.

use crate::models::{
    DisplayItem, History, ItemRecord, MAX_DISPLAYED_ITEMS, PanelSummary, RunRecord, ViewModel,
};
use crate::parsers::parse_history;
use crate::utils::shorten_home;

/// Build the panel state from the raw text of `history.json`
///
/// The history is expected newest first, as the cleaner writes it; index 0 is taken
/// as the latest run without re-sorting.
///
/// # Arguments
///
/// * `raw_text` - Contents of the history file (`[]` when the file is missing)
/// * `home_dir` - Home directory shortened to `~` in displayed paths; empty disables it
///
/// # Examples
///
/// ```
/// use dev_cleaner_status::build;
///
/// let raw = r#"[{"timestamp":"t1","dry_run":true,"total_freed_mb":12.34,
///     "results":[{"path":"/home/u/a","size_mb":1,"deleted":false}]}]"#;
/// let view = build(raw, "/home/u");
///
/// let summary = view.summary().unwrap();
/// assert_eq!(summary.displayed_items[0].path, "~/a");
/// assert_eq!(summary.overflow_count, 0);
///
/// assert!(!build("not json", "/home/u").has_data());
/// ```
pub fn build(raw_text: &str, home_dir: &str) -> ViewModel {
    let history = parse_history(raw_text).unwrap_or_else(|e| {
        tracing::debug!(error = %format!("{:#}", e), "history undecodable, showing empty panel");
        History::new()
    });
    build_from_history(history, home_dir)
}

/// Build the panel state from an already decoded history
pub fn build_from_history(history: History, home_dir: &str) -> ViewModel {
    let run_count = history.len();
    let lifetime_freed_mb = lifetime_freed_mb(&history);

    let Some(last_run) = history.into_iter().next() else {
        return ViewModel::Empty;
    };

    let displayed_items = last_run
        .results
        .iter()
        .take(MAX_DISPLAYED_ITEMS)
        .map(|item| display_item(item, home_dir))
        .collect();
    let overflow_count = last_run.results.len().saturating_sub(MAX_DISPLAYED_ITEMS);

    ViewModel::Ready(PanelSummary {
        last_run,
        lifetime_freed_mb,
        run_count,
        displayed_items,
        overflow_count,
    })
}

/// Total megabytes freed over every logged run; absent totals count as zero
pub fn lifetime_freed_mb(history: &[RunRecord]) -> f64 {
    history.iter().map(|run| run.total_freed_mb).sum()
}

fn display_item(item: &ItemRecord, home_dir: &str) -> DisplayItem {
    DisplayItem {
        path: shorten_home(&item.path, home_dir),
        size_mb: item.size_mb,
        deleted: item.deleted,
        status: item.status(),
    }
}

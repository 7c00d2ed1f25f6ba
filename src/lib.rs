//! Dev Cleaner Status - status panel for a dev dependency cleaner's run history
//!
//! The cleaner removes stale `node_modules` / `venv` folders and logs every run to
//! `history.json`, newest first. This library turns that log into a compact status
//! panel:
//!
//! - Tolerant decoding of the history log (absent and `null` fields default)
//! - A pure, total view model builder: latest run, lifetime total, first five items
//! - Home-directory shortening of displayed paths
//! - Plain-text, JSON and full-screen terminal renderings
//!
//! # Example
//!
//! ```
//! use dev_cleaner_status::{build, render_panel};
//!
//! let raw = r#"[{"timestamp":"2025-03-01 10:00:00","dry_run":false,"total_freed_mb":512.5,
//!     "results":[{"path":"/Users/alice/app/node_modules","size_mb":512.5,"deleted":true}]}]"#;
//! let view = build(raw, "/Users/alice");
//!
//! assert!(view.has_data());
//! assert!(render_panel(&view).contains("~/app/node_modules"));
//! ```

pub mod cli;
pub mod logging;
pub mod models;
pub mod parsers;
pub mod tui;
pub mod utils;
pub mod view;

// Re-export commonly used types
pub use models::{History, ItemRecord, RunRecord, ViewModel};
pub use parsers::parse_history;
pub use utils::shorten_home;
pub use view::{build, render_history_table, render_panel};

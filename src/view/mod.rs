//! History aggregation and panel rendering.
//!
//! - [`builder`] turns the raw log text into a [`crate::models::ViewModel`]
//! - [`format`] holds the number and duration formatting rules
//! - [`text`] renders the panel and the run history as plain text

pub mod builder;
pub mod format;
pub mod text;

pub use builder::{build, build_from_history, lifetime_freed_mb};
pub use text::{render_history_table, render_panel};

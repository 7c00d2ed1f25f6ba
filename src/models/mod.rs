//! Data models for the cleaner's run history and the status panel.
//!
//! - [`RunRecord`] / [`ItemRecord`] - entries of `history.json`, as written by the cleaner
//! - [`History`] - the whole log, most recent run first
//! - [`ViewModel`] - the derived, render-ready panel state
//!
//! Record fields tolerate being absent or `null` through the helpers in
//! [`crate::parsers::deserializers`].

pub mod history;
pub mod view;

pub use history::{History, ItemRecord, ItemStatus, RunRecord, RunStatus};
pub use view::{DisplayItem, MAX_DISPLAYED_ITEMS, PanelSummary, ViewModel};

//! Parsers for the cleaner's `history.json` log
//!
//! # Error Handling Strategy
//!
//! Decoding itself is strict about shape and lenient about content:
//!
//! - **Shape**: the log must be a JSON array of run objects. Anything else (truncated
//!   writes, a hand-edited file, a different tool's output) is an error from
//!   [`parse_history`].
//! - **Content**: absent or `null` fields inside a run default to `0`, `false` or an
//!   empty list, since older cleaner versions omitted some of them. Display-only
//!   item extras (`name`, `unused_hours`, `error`) also read as absent when their
//!   value has the wrong type.
//! - **Boundary**: the view builder collapses every parse error into the empty panel
//!   state, so nothing here ever reaches the user as a failure.

pub mod deserializers;
pub mod history;

pub use history::{
    EMPTY_HISTORY, parse_history, read_history_text, read_history_text_or_empty,
};

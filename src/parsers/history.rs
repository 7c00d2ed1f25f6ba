use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::History;
use crate::utils::validate_file_size;

/// Text standing in for a history file that does not exist yet
pub const EMPTY_HISTORY: &str = "[]";

/// Decode the cleaner's `history.json` text into runs, most recent first
///
/// Blank input is an empty history. Anything that is not a JSON array of run
/// objects is an error; absent or `null` fields inside a run are defaulted.
pub fn parse_history(raw: &str) -> Result<History> {
    if raw.trim().is_empty() {
        return Ok(History::new());
    }

    serde_json::from_str::<History>(raw).context("Failed to decode history JSON")
}

/// Read the history file as text
///
/// A missing file yields [`EMPTY_HISTORY`] instead of an error, since the
/// cleaner only creates the file after its first run.
pub fn read_history_text(path: &Path) -> Result<String> {
    // Open file and validate size on the handle to avoid TOCTOU race condition
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "history file not found");
            return Ok(EMPTY_HISTORY.to_string());
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to open history file: {}", path.display()));
        }
    };
    validate_file_size(&file, path)?;

    let mut text = String::new();
    file.read_to_string(&mut text)
        .with_context(|| format!("Failed to read history file: {}", path.display()))?;
    Ok(text)
}

/// Read the history file, degrading any failure to [`EMPTY_HISTORY`]
///
/// Used by the display paths, which must keep showing a panel no matter what
/// state the file is in.
pub fn read_history_text_or_empty(path: &Path) -> String {
    read_history_text(path).unwrap_or_else(|e| {
        tracing::warn!(path = %path.display(), error = %format!("{:#}", e), "history file unreadable");
        EMPTY_HISTORY.to_string()
    })
}

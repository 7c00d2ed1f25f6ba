use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Environment variable overriding the history file location
pub const HISTORY_ENV: &str = "DEV_CLEANER_HISTORY";

/// Location of the history file, relative to the home directory
const DEFAULT_HISTORY_RELATIVE: &str = "Desktop/DevCleaner/history.json";

/// Get the current user's home directory
pub fn get_home_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .or_else(|| env::var_os("HOME").map(PathBuf::from))
        .context("Could not determine home directory")
}

/// Default history file location (~/Desktop/DevCleaner/history.json)
pub fn default_history_path(home: &Path) -> PathBuf {
    home.join(DEFAULT_HISTORY_RELATIVE)
}

/// Resolve the history file: explicit flag, then `DEV_CLEANER_HISTORY`, then the default
pub fn resolve_history_path(explicit: Option<&Path>, home: Option<&Path>) -> Result<PathBuf> {
    resolve_history_path_internal(explicit, env::var_os(HISTORY_ENV).map(PathBuf::from), home)
}

/// Internal helper with the environment value passed in (for testing)
pub(crate) fn resolve_history_path_internal(
    explicit: Option<&Path>,
    from_env: Option<PathBuf>,
    home: Option<&Path>,
) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = from_env.filter(|p| !p.as_os_str().is_empty()) {
        return Ok(path);
    }
    let home = home.context(format!(
        "No history file given and no home directory found; pass --history-file or set {}",
        HISTORY_ENV
    ))?;
    Ok(default_history_path(home))
}

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result, bail};

// Maximum size accepted for history.json: 10MB
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Replaces the first occurrence of the home directory in a path with `~`
///
/// This is a plain substring replacement, not a path-segment-aware one: the first
/// match is replaced wherever it appears and later matches are left alone. Paths
/// without a match, and any path when `home` is empty, are returned unchanged.
///
/// # Examples
///
/// ```
/// use dev_cleaner_status::shorten_home;
///
/// assert_eq!(shorten_home("/Users/alice/Projects/app", "/Users/alice"), "~/Projects/app");
/// assert_eq!(shorten_home("/opt/local/bin", "/Users/alice"), "/opt/local/bin");
/// ```
pub fn shorten_home(path: &str, home: &str) -> String {
    if home.is_empty() {
        return path.to_string();
    }
    path.replacen(home, "~", 1)
}

/// Validates that a file's size is within acceptable limits (10MB)
///
/// Takes an open file handle to avoid TOCTOU (time-of-check-time-of-use)
/// race conditions where the file could be modified between the size check
/// and the read that follows.
///
/// # Errors
///
/// Returns an error if:
/// - The file metadata cannot be read
/// - The path is not a regular file
/// - The file is larger than 10MB
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    if !metadata.is_file() {
        bail!("Not a regular file: {}", path.display());
    }

    let file_size = metadata.len();
    if file_size > MAX_FILE_SIZE_BYTES {
        bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            file_size,
            MAX_FILE_SIZE_BYTES
        );
    }

    Ok(())
}

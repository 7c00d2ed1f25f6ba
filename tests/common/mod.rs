//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value, json};
use tempfile::TempDir;

/// History location relative to the home directory, where the cleaner writes it
pub const HISTORY_RELATIVE: &str = "Desktop/DevCleaner/history.json";

/// Builder for a temporary home directory holding a cleaner history file
pub struct HomeDirBuilder {
    temp_dir: TempDir,
}

impl HomeDirBuilder {
    /// Create a new builder with an empty home directory (no history file)
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Path to the home directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write history.json with raw content
    pub fn with_history(self, content: &str) -> Self {
        let history_path = self.temp_dir.path().join(HISTORY_RELATIVE);
        fs::create_dir_all(history_path.parent().unwrap()).expect("Failed to create history dir");
        fs::write(history_path, content).expect("Failed to write history.json");
        self
    }

    /// Write history.json from run builders, newest first
    pub fn with_runs(self, runs: &[RunBuilder]) -> Self {
        let content = history_json(runs);
        self.with_history(&content)
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for HomeDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Path of the history file inside a home directory
pub fn history_path(home: &Path) -> PathBuf {
    home.join(HISTORY_RELATIVE)
}

/// Serialize run builders as the cleaner would
pub fn history_json(runs: &[RunBuilder]) -> String {
    let values: Vec<Value> = runs.iter().map(RunBuilder::to_value).collect();
    serde_json::to_string_pretty(&values).expect("Failed to serialize history")
}

/// Builder for a run record
///
/// Fields left unset are omitted from the JSON entirely, to exercise defaults.
#[derive(Clone)]
pub struct RunBuilder {
    fields: Map<String, Value>,
}

impl RunBuilder {
    /// A dry run with a timestamp and no items
    pub fn new() -> Self {
        Self { fields: Map::new() }.timestamp("2025-03-01 10:00:00").dry_run(true).freed(0.0)
    }

    /// A run with no fields at all
    pub fn bare() -> Self {
        Self { fields: Map::new() }
    }

    pub fn timestamp(mut self, timestamp: &str) -> Self {
        self.fields.insert("timestamp".to_string(), json!(timestamp));
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.fields.insert("dry_run".to_string(), json!(dry_run));
        self
    }

    pub fn freed(mut self, mb: f64) -> Self {
        self.fields.insert("total_freed_mb".to_string(), json!(mb));
        self
    }

    /// Drop a field, or replace it with `null`
    pub fn without(mut self, field: &str) -> Self {
        self.fields.remove(field);
        self
    }

    pub fn null(mut self, field: &str) -> Self {
        self.fields.insert(field.to_string(), Value::Null);
        self
    }

    pub fn items(mut self, items: &[ItemBuilder]) -> Self {
        let values: Vec<Value> = items.iter().map(ItemBuilder::to_value).collect();
        self.fields.insert("results".to_string(), Value::Array(values));
        self
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }
}

impl Default for RunBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for an item record, shaped like the cleaner's output
#[derive(Clone)]
pub struct ItemBuilder {
    path: String,
    size_mb: f64,
    deleted: bool,
    unused_hours: u64,
    error: Option<String>,
}

impl ItemBuilder {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            size_mb: 1.0,
            deleted: false,
            unused_hours: 72,
            error: None,
        }
    }

    pub fn size(mut self, size_mb: f64) -> Self {
        self.size_mb = size_mb;
        self
    }

    pub fn deleted(mut self) -> Self {
        self.deleted = true;
        self
    }

    pub fn unused_hours(mut self, hours: u64) -> Self {
        self.unused_hours = hours;
        self
    }

    pub fn error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn to_value(&self) -> Value {
        let name = Path::new(&self.path)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        json!({
            "path": self.path,
            "name": name,
            "size_mb": self.size_mb,
            "unused_hours": self.unused_hours,
            "deleted": self.deleted,
            "error": self.error,
        })
    }
}

/// `count` items under `root`, named `p0`, `p1`, ...
pub fn numbered_items(root: &str, count: usize) -> Vec<ItemBuilder> {
    (0..count).map(|i| ItemBuilder::new(&format!("{}/p{}", root, i)).size(i as f64)).collect()
}

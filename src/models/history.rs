use serde::{Deserialize, Serialize};

use crate::parsers::deserializers::{lenient_option, null_as_default};

/// History as written by the cleaner: most recent run first.
///
/// The producer prepends every new run, so index 0 is always the latest one.
/// Nothing in this crate re-sorts it.
pub type History = Vec<RunRecord>;

/// One invocation of the cleanup tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Opaque, tool-supplied timestamp (never parsed)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dry_run: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_freed_mb: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<ItemRecord>,
}

/// A single folder found (and possibly removed) during a run
///
/// `name`, `unused_hours` and `error` are display-only extras: a value of the
/// wrong type (a negative idle time for a folder with a future access time, say)
/// reads as absent instead of rejecting the log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub path: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub size_mb: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub deleted: bool,
    #[serde(default, deserialize_with = "lenient_option", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_option", skip_serializing_if = "Option::is_none")]
    pub unused_hours: Option<u64>,
    #[serde(default, deserialize_with = "lenient_option", skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RunRecord {
    /// Number of folders the run reported, deleted or not
    pub fn items_processed(&self) -> usize {
        self.results.len()
    }

    /// Badge for this run, a pure function of `dry_run`
    pub fn status(&self) -> RunStatus {
        RunStatus::from_dry_run(self.dry_run)
    }
}

/// Outcome of an individual item, used to pick its marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    Deleted,
    Failed,
    Inspected,
}

impl ItemRecord {
    pub fn status(&self) -> ItemStatus {
        if self.deleted {
            ItemStatus::Deleted
        } else if self.error.is_some() {
            ItemStatus::Failed
        } else {
            ItemStatus::Inspected
        }
    }
}

/// Mutually exclusive run badges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    DryRun,
    Cleanup,
}

impl RunStatus {
    pub fn from_dry_run(dry_run: bool) -> Self {
        if dry_run { RunStatus::DryRun } else { RunStatus::Cleanup }
    }

    /// Short badge text shown next to the panel title
    pub fn badge(self) -> &'static str {
        match self {
            RunStatus::DryRun => "DRY RUN",
            RunStatus::Cleanup => "CLEANUP",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            RunStatus::DryRun => "dry-run / inspection",
            RunStatus::Cleanup => "cleanup performed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_record_all_fields() {
        let json = r#"{
            "timestamp": "2025-03-01 10:00:00",
            "dry_run": false,
            "total_freed_mb": 512.5,
            "results": [
                {
                    "path": "/Users/alice/Projects/app/node_modules",
                    "name": "node_modules",
                    "size_mb": 512.5,
                    "unused_hours": 96,
                    "deleted": true,
                    "error": null
                }
            ]
        }"#;

        let run: RunRecord = serde_json::from_str(json).unwrap();
        assert_eq!(run.timestamp.as_deref(), Some("2025-03-01 10:00:00"));
        assert!(!run.dry_run);
        assert_eq!(run.total_freed_mb, 512.5);
        assert_eq!(run.items_processed(), 1);

        let item = &run.results[0];
        assert_eq!(item.name.as_deref(), Some("node_modules"));
        assert_eq!(item.unused_hours, Some(96));
        assert!(item.error.is_none());
        assert_eq!(item.status(), ItemStatus::Deleted);
    }

    #[test]
    fn test_run_record_missing_fields_default() {
        let run: RunRecord = serde_json::from_str("{}").unwrap();
        assert!(run.timestamp.is_none());
        assert!(!run.dry_run);
        assert_eq!(run.total_freed_mb, 0.0);
        assert!(run.results.is_empty());
    }

    #[test]
    fn test_run_record_null_fields_default() {
        let json = r#"{"timestamp":null,"dry_run":null,"total_freed_mb":null,"results":null}"#;
        let run: RunRecord = serde_json::from_str(json).unwrap();
        assert!(run.timestamp.is_none());
        assert!(!run.dry_run);
        assert_eq!(run.total_freed_mb, 0.0);
        assert!(run.results.is_empty());
    }

    #[test]
    fn test_item_record_integer_size() {
        let item: ItemRecord =
            serde_json::from_str(r#"{"path":"/a","size_mb":1,"deleted":false}"#).unwrap();
        assert_eq!(item.size_mb, 1.0);
        assert_eq!(item.status(), ItemStatus::Inspected);
    }

    #[test]
    fn test_item_record_failed_status() {
        let item: ItemRecord = serde_json::from_str(
            r#"{"path":"/a","size_mb":3.2,"deleted":false,"error":"Permission denied"}"#,
        )
        .unwrap();
        assert_eq!(item.status(), ItemStatus::Failed);
    }

    #[test]
    fn test_item_record_odd_extras_read_as_absent() {
        let item: ItemRecord = serde_json::from_str(
            r#"{"path":"/a","size_mb":2,"deleted":true,"name":5,"unused_hours":-3,"error":false}"#,
        )
        .unwrap();
        assert_eq!(item.path, "/a");
        assert!(item.name.is_none());
        assert!(item.unused_hours.is_none());
        assert!(item.error.is_none());
        assert_eq!(item.status(), ItemStatus::Deleted);
    }

    #[test]
    fn test_wrong_field_type_is_rejected() {
        let result = serde_json::from_str::<RunRecord>(r#"{"total_freed_mb":"lots"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_status_from_dry_run() {
        assert_eq!(RunStatus::from_dry_run(true), RunStatus::DryRun);
        assert_eq!(RunStatus::from_dry_run(false), RunStatus::Cleanup);
        assert_eq!(RunStatus::DryRun.badge(), "DRY RUN");
        assert_eq!(RunStatus::Cleanup.description(), "cleanup performed");
    }
}

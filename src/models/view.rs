use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::history::{ItemStatus, RunRecord, RunStatus};

/// Maximum number of items listed for the latest run
pub const MAX_DISPLAYED_ITEMS: usize = 5;

/// Render-ready state of the status panel, rebuilt on every refresh
#[derive(Debug, Clone, PartialEq)]
pub enum ViewModel {
    /// No usable history: missing file, empty log or undecodable text
    Empty,
    Ready(PanelSummary),
}

/// Everything the panel shows when at least one run is logged
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSummary {
    /// Latest run, exactly as logged
    pub last_run: RunRecord,
    /// Sum of `total_freed_mb` over every logged run
    pub lifetime_freed_mb: f64,
    pub run_count: usize,
    /// First few items of the latest run, paths shortened for display
    pub displayed_items: Vec<DisplayItem>,
    /// Items of the latest run that did not fit in `displayed_items`
    pub overflow_count: usize,
}

/// An item of the latest run as it appears on the panel
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DisplayItem {
    pub path: String,
    pub size_mb: f64,
    pub deleted: bool,
    #[serde(skip)]
    pub status: ItemStatus,
}

impl ViewModel {
    pub fn has_data(&self) -> bool {
        matches!(self, ViewModel::Ready(_))
    }

    pub fn summary(&self) -> Option<&PanelSummary> {
        match self {
            ViewModel::Empty => None,
            ViewModel::Ready(summary) => Some(summary),
        }
    }
}

impl PanelSummary {
    pub fn status(&self) -> RunStatus {
        self.last_run.status()
    }

    pub fn items_processed(&self) -> usize {
        self.last_run.items_processed()
    }
}

// Flat camelCase shape consumed by external renderers:
// `{"hasData":false}` or `{"hasData":true,"lastRun":{..},...}`
impl Serialize for ViewModel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ViewModel::Empty => {
                let mut state = serializer.serialize_struct("ViewModel", 1)?;
                state.serialize_field("hasData", &false)?;
                state.end()
            }
            ViewModel::Ready(summary) => {
                let mut state = serializer.serialize_struct("ViewModel", 8)?;
                state.serialize_field("hasData", &true)?;
                state.serialize_field("lastRun", &summary.last_run)?;
                state.serialize_field("status", &summary.status())?;
                state.serialize_field("lifetimeFreedMb", &summary.lifetime_freed_mb)?;
                state.serialize_field("runCount", &summary.run_count)?;
                state.serialize_field("itemsProcessed", &summary.items_processed())?;
                state.serialize_field("displayedItems", &summary.displayed_items)?;
                state.serialize_field("overflowCount", &summary.overflow_count)?;
                state.end()
            }
        }
    }
}

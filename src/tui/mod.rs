// Full-screen status panel refreshed on a fixed cadence
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;
mod timestamps;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
pub use app::{DEFAULT_REFRESH_INTERVAL, Dashboard};
pub use terminal::TerminalManager;

/// Run the dashboard until the user quits
pub fn run_dashboard(history_path: PathBuf, home_dir: String, interval: Duration) -> Result<()> {
    let mut manager = TerminalManager::new()?;
    let mut dashboard = Dashboard::new(history_path, home_dir, interval);

    let res = dashboard.run(manager.terminal_mut());

    manager.restore()?;
    res
}

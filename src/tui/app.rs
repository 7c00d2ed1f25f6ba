//! Dashboard state and refresh loop.
//!
//! The dashboard re-reads `history.json` on a fixed cadence and rebuilds the
//! [`ViewModel`] from scratch each time; nothing carries over between refreshes
//! except the time of the last one. Between refreshes it only redraws (for the
//! countdown and terminal resizes) and watches for the quit keys.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::{DateTime, Local};
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, poll_event};
use super::rendering::{RenderState, render_ui};
use crate::models::ViewModel;
use crate::parsers::read_history_text_or_empty;
use crate::view::build;

/// Default refresh cadence, five minutes like the desktop widget
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(300);

/// Refresh cadence bounds; a zero interval would spin on the file
const MIN_REFRESH_INTERVAL: Duration = Duration::from_secs(1);
const MAX_REFRESH_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

/// Redraw at least this often so the countdown stays current
const REDRAW_INTERVAL: Duration = Duration::from_secs(1);
/// Upper bound on a single event poll
const POLL_TIMEOUT: Duration = Duration::from_millis(250);

pub struct Dashboard {
    history_path: PathBuf,
    home_dir: String,
    interval: Duration,
    view: ViewModel,
    refreshed_at: Option<DateTime<Local>>,
    next_refresh: Instant,
    should_quit: bool,
    // Dirty state tracking for efficient rendering
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl Dashboard {
    /// Create a dashboard whose first refresh is due immediately
    pub fn new(history_path: PathBuf, home_dir: String, interval: Duration) -> Self {
        let now = Instant::now();
        Self {
            history_path,
            home_dir,
            interval: interval.clamp(MIN_REFRESH_INTERVAL, MAX_REFRESH_INTERVAL),
            view: ViewModel::Empty,
            refreshed_at: None,
            next_refresh: now,
            should_quit: false,
            needs_redraw: true,
            last_draw_time: now,
        }
    }

    pub fn view(&self) -> &ViewModel {
        &self.view
    }

    /// Re-read the history file and rebuild the panel state
    pub fn refresh(&mut self) {
        let raw = read_history_text_or_empty(&self.history_path);
        self.view = build(&raw, &self.home_dir);
        self.refreshed_at = Some(Local::now());
        self.next_refresh = Instant::now() + self.interval;
        self.needs_redraw = true;
        tracing::debug!(
            path = %self.history_path.display(),
            has_data = self.view.has_data(),
            "dashboard refreshed"
        );
    }

    /// Refresh when the cadence says so; returns whether a refresh happened
    fn refresh_if_due(&mut self, now: Instant) -> bool {
        if now >= self.next_refresh {
            self.refresh();
            true
        } else {
            false
        }
    }

    fn time_until_refresh(&self, now: Instant) -> Duration {
        self.next_refresh.saturating_duration_since(now)
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            let now = Instant::now();
            self.refresh_if_due(now);

            let elapsed = now.duration_since(self.last_draw_time);
            if self.needs_redraw || elapsed >= REDRAW_INTERVAL {
                let state = RenderState {
                    refreshed_at: self.refreshed_at.as_ref(),
                    next_refresh_in: self.time_until_refresh(now),
                    interval: self.interval,
                };
                terminal.draw(|f| render_ui(f, &self.view, &state))?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let timeout = self.time_until_refresh(now).min(POLL_TIMEOUT);
            let action = poll_event(timeout)?;
            self.handle_action(action);
        }

        Ok(())
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::None => {}
        }
    }
}

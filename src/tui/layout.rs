use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Panel width in columns, matching the compact desktop widget
pub const PANEL_WIDTH: u16 = 48;

/// Dashboard layout: fixed-width panel on the left, status bar along the bottom
pub struct PanelLayout {
    pub panel_area: Rect,
    pub status_area: Rect,
}

impl PanelLayout {
    pub fn new(area: Rect) -> Self {
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Panel (at least 3 rows)
                Constraint::Length(1), // Status bar (1 row)
            ])
            .split(area);

        // Narrow terminals get the full width
        let horizontal_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Max(PANEL_WIDTH), Constraint::Min(0)])
            .split(vertical_chunks[0]);

        Self { panel_area: horizontal_chunks[0], status_area: vertical_chunks[1] }
    }
}

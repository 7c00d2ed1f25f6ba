use std::time::Duration;

use chrono::{DateTime, Local};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::layout::PanelLayout;
use super::timestamps::{format_countdown, format_interval, format_refreshed_at};
use crate::models::{PanelSummary, RunStatus, ViewModel};
use crate::view::text::{
    EMPTY_PANEL_MESSAGE, PANEL_TITLE, item_line, overflow_line, summary_rows,
};

const MUTED: Color = Color::Rgb(176, 176, 176);
const VALUE: Color = Color::Rgb(224, 224, 224);
const BORDER: Color = Color::Rgb(113, 113, 122);
const FREED: Color = Color::Rgb(102, 221, 136);
const LIFETIME: Color = Color::Rgb(136, 187, 255);
const ITEM: Color = Color::Rgb(153, 153, 153);
const OVERFLOW: Color = Color::Rgb(102, 102, 102);
const STATUS_BG: Color = Color::Rgb(24, 24, 27);

/// Everything besides the view model the frame needs
pub struct RenderState<'a> {
    pub refreshed_at: Option<&'a DateTime<Local>>,
    pub next_refresh_in: Duration,
    pub interval: Duration,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, view: &ViewModel, state: &RenderState) {
    let layout = PanelLayout::new(frame.area());

    render_panel(frame, layout.panel_area, view);
    render_status_bar(frame, layout.status_area, state);
}

fn badge_style(status: RunStatus) -> Style {
    let (fg, bg) = match status {
        RunStatus::DryRun => (Color::Rgb(170, 170, 255), Color::Rgb(40, 40, 80)),
        RunStatus::Cleanup => (FREED, Color::Rgb(20, 64, 32)),
    };
    Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
}

fn panel_lines(summary: &PanelSummary, width: u16) -> Vec<Line<'static>> {
    let status = summary.status();
    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!(" {} ", status.badge()), badge_style(status)),
            Span::styled(format!("  {}", status.description()), Style::default().fg(MUTED)),
        ]),
        Line::from(""),
    ];

    let colors = [VALUE, VALUE, FREED, LIFETIME];
    for ((label, value), color) in summary_rows(summary).into_iter().zip(colors) {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<18}", label), Style::default().fg(MUTED)),
            Span::styled(value, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        ]));
    }

    if !summary.displayed_items.is_empty() {
        let divider_width = usize::from(width.saturating_sub(2)).max(1);
        lines.push(Line::styled("─".repeat(divider_width), Style::default().fg(BORDER)));
        for item in &summary.displayed_items {
            lines.push(Line::styled(item_line(item), Style::default().fg(ITEM)));
        }
        if summary.overflow_count > 0 {
            lines.push(Line::styled(
                overflow_line(summary.overflow_count),
                Style::default().fg(OVERFLOW),
            ));
        }
    }

    lines
}

fn render_panel(frame: &mut Frame, area: Rect, view: &ViewModel) {
    let content = match view.summary() {
        Some(summary) => Text::from(panel_lines(summary, area.width)),
        None => Text::from(Line::styled(EMPTY_PANEL_MESSAGE, Style::default().fg(OVERFLOW))),
    };

    // Long paths are cut at the border rather than wrapped, like the widget's ellipsis
    let paragraph = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER))
            .title(format!(" {} ", PANEL_TITLE)),
    );

    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let refreshed = state
        .refreshed_at
        .map(format_refreshed_at)
        .unwrap_or_else(|| "never".to_string());

    let status_text = format!(
        " refreshed {} | next in {} ({}) | q: quit ",
        refreshed,
        format_countdown(state.next_refresh_in),
        format_interval(state.interval)
    );

    let paragraph = Paragraph::new(status_text)
        .style(Style::default().fg(Color::Rgb(250, 250, 250)).bg(STATUS_BG));

    frame.render_widget(paragraph, area);
}

//! Screen layout.
//!
//! Pure layout logic: title bar, item list and status bar, drawn from a
//! read-only view of the engine.

use super::constants::{STATUS_BAR_HEIGHT, TITLE, TITLE_HEIGHT};
use super::list::render_list;
use super::status::status_text;
use super::styles::{status_style, title_style};
use super::{ReplayPhase, ReplaySettings};
use crate::view_state::ViewStateEngine;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// Render the whole replay screen.
pub fn render_replay(
    frame: &mut Frame,
    engine: &ViewStateEngine,
    settings: &ReplaySettings,
    phase: ReplayPhase,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    render_title(frame, chunks[0], settings);

    let snapshot = engine.snapshot(settings.order);
    let latest = engine.most_recent().map(|entry| entry.ordinal());
    render_list(
        frame,
        chunks[1],
        &snapshot,
        settings.order,
        latest,
        engine.palette(),
        settings.colors,
    );

    let status = Paragraph::new(Line::from(status_text(engine, settings, phase)))
        .style(status_style(settings.colors));
    frame.render_widget(status, chunks[2]);
}

fn render_title(frame: &mut Frame, area: Rect, settings: &ReplaySettings) {
    let title = Paragraph::new(Line::from(format!(" {TITLE} "))).style(title_style(settings.colors));
    frame.render_widget(title, area);
}

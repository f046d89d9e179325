//! Platform-native comparison: ratatui's built-in `Tabs` widget bound to
//! the same gender selection the segpick controls write.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::Tabs,
};

use crate::app::Gender;
use crate::tui::theme::*;

/// Render the native tab bar following the shared selection.
pub fn render_native_tabs(frame: &mut Frame, area: Rect, gender: Gender) {
    let layout = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(area);

    frame.render_widget(
        Line::styled("  Native tabs (ratatui)", Style::new().fg(TEXT_DIM)),
        layout[0],
    );

    let selected = Gender::ALL.iter().position(|g| *g == gender);
    let tabs = Tabs::new(Gender::ALL.iter().map(|g| Line::from(g.label())))
        .select(selected)
        .style(Style::new().fg(TEXT_DIM))
        .highlight_style(Style::new().fg(TEXT_WHITE).bg(ACCENT_BLUE));
    frame.render_widget(tabs, layout[1]);
}

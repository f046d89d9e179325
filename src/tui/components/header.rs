//! Demo header component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::theme::*;

/// Render the centered title and subtitle.
pub fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled("seg", Style::new().fg(ACCENT_CORAL).bold()),
            Span::styled("pick", Style::new().fg(ACCENT_BLUE).bold()),
            Span::styled(" — segmented picker demo", Style::new().fg(TEXT_WHITE)),
        ]),
        Line::styled(
            "one selection drives every control below",
            Style::new().fg(TEXT_DIM),
        ),
    ];
    frame.render_widget(Paragraph::new(lines).centered(), area);
}

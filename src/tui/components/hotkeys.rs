//! Hotkey hint bar.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
};

use crate::tui::theme::*;

/// Render the key hints at the bottom of the screen.
pub fn render_hotkeys(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled("[←/→]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" select · ", Style::new().fg(TEXT_DIM)),
        Span::styled("[↑/↓]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" focus · ", Style::new().fg(TEXT_DIM)),
        Span::styled("[click]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" select · ", Style::new().fg(TEXT_DIM)),
        Span::styled("[q]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" quit", Style::new().fg(TEXT_DIM)),
    ]);
    frame.render_widget(line, area);
}

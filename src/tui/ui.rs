//! Top-level demo screen layout.

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use crate::app::{App, PICKER_GENDER, PICKER_INTERVAL, PICKER_UNDERLINE};

use super::components::*;

pub fn render(frame: &mut Frame, app: &mut App) {
    let App {
        gender,
        interval,
        focus,
        gender_state,
        interval_state,
        underline_state,
        interactions,
        ..
    } = app;

    // Regions are re-registered against the layout drawn this frame.
    interactions.clear();

    let area = frame.area();
    let main_layout = Layout::vertical([
        Constraint::Length(3), // Header + spacing
        Constraint::Length(4), // Default picker
        Constraint::Length(4), // Gradient picker
        Constraint::Length(3), // Custom indicator picker
        Constraint::Length(2), // Native tabs
        Constraint::Min(0),    // Spacer
        Constraint::Length(1), // Hotkeys
    ])
    .horizontal_margin(2)
    .split(area);

    render_header(frame, main_layout[0]);
    render_gender_picker(
        frame,
        main_layout[1],
        *gender,
        gender_state,
        interactions,
        *focus == PICKER_GENDER,
    );
    render_interval_picker(
        frame,
        main_layout[2],
        *interval,
        interval_state,
        interactions,
        *focus == PICKER_INTERVAL,
    );
    render_underline_picker(
        frame,
        main_layout[3],
        *gender,
        underline_state,
        interactions,
        *focus == PICKER_UNDERLINE,
    );
    render_native_tabs(frame, main_layout[4], *gender);
    render_hotkeys(frame, main_layout[6]);
}

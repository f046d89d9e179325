//! Gradient-styled segmented picker section.
//!
//! Shows the explicit-width override, square corners, and a gradient
//! indicator fill. The last label is longer than its slot on most
//! terminal widths and gets clipped, not reflowed.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
};
use segpick::{Fill, PickerState, PickerStyle, SegmentedPicker};

use crate::app::{INTERVALS, PICKER_INTERVAL};
use crate::events::Action;
use crate::tui::interaction::InteractionRegistry;
use crate::tui::theme::*;

/// Render the gradient picker over the interval selection.
pub fn render_interval_picker(
    frame: &mut Frame,
    area: Rect,
    interval: &'static str,
    state: &mut PickerState,
    interactions: &mut InteractionRegistry,
    focused: bool,
) {
    let layout = Layout::vertical([Constraint::Length(1), Constraint::Length(3)]).split(area);

    let marker = if focused { "▸ " } else { "  " };
    let title_style = if focused {
        Style::new().fg(ACCENT_CORAL).bold()
    } else {
        Style::new().fg(TEXT_DIM)
    };
    frame.render_widget(
        Line::from(vec![
            Span::styled(marker, title_style),
            Span::styled("Gradient picker", title_style),
        ]),
        layout[0],
    );

    let picker = SegmentedPicker::new(&INTERVALS, &interval, move |item| {
        let style = if *item == interval {
            Style::new().fg(TEXT_WHITE).bold()
        } else {
            Style::new().fg(TEXT_DIM)
        };
        Line::from(Span::styled(*item, style))
    })
    .style(
        PickerStyle::default()
            .width(46)
            .corner_radius(0)
            .background_color(CONTROL_BG)
            .indicator_fill(Fill::Gradient {
                from: ACCENT_CORAL,
                to: ACCENT_GOLD,
            }),
    );

    for index in 0..INTERVALS.len() {
        if let Some(slot) = picker.slot_area(layout[1], index) {
            interactions.register_click(
                "interval_slot",
                slot.into(),
                Action::SelectSegment {
                    picker: PICKER_INTERVAL,
                    index,
                },
            );
        }
    }

    frame.render_stateful_widget(picker, layout[1], state);
}

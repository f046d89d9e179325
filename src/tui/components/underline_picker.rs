//! Custom-indicator picker section.
//!
//! Replaces the default filled indicator with an underline drawn by a
//! caller-supplied closure, and shares the gender selection with the
//! default picker above it: two controls, one binding.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
};
use segpick::{PickerState, PickerStyle, SegmentedPicker};

use crate::app::{Gender, PICKER_UNDERLINE};
use crate::events::Action;
use crate::tui::interaction::InteractionRegistry;
use crate::tui::theme::*;

/// Render the custom-indicator picker over the shared gender selection.
pub fn render_underline_picker(
    frame: &mut Frame,
    area: Rect,
    gender: Gender,
    state: &mut PickerState,
    interactions: &mut InteractionRegistry,
    focused: bool,
) {
    let layout = Layout::vertical([Constraint::Length(1), Constraint::Length(2)]).split(area);

    let marker = if focused { "▸ " } else { "  " };
    let title_style = if focused {
        Style::new().fg(ACCENT_MINT).bold()
    } else {
        Style::new().fg(TEXT_DIM)
    };
    frame.render_widget(
        Line::from(vec![
            Span::styled(marker, title_style),
            Span::styled("Custom indicator (same selection)", title_style),
        ]),
        layout[0],
    );

    // Two borderless rows: labels on the top one, the underline indicator
    // on the bottom one.
    let picker = SegmentedPicker::new(&Gender::ALL, &gender, move |item| {
        let style = if *item == gender {
            Style::new().fg(ACCENT_MINT).bold()
        } else {
            Style::new().fg(TEXT_DIM)
        };
        Line::from(Span::styled(item.label(), style))
    })
    .style(
        PickerStyle::default()
            .height(2)
            .background_color(CONTROL_BG),
    )
    .indicator(|rect, buf| {
        let y = rect.bottom().saturating_sub(1);
        for x in rect.left()..rect.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol("▔").set_fg(ACCENT_MINT);
            }
        }
    });

    for index in 0..Gender::ALL.len() {
        if let Some(slot) = picker.slot_area(layout[1], index) {
            interactions.register_click(
                "underline_slot",
                slot.into(),
                Action::SelectSegment {
                    picker: PICKER_UNDERLINE,
                    index,
                },
            );
        }
    }

    frame.render_stateful_widget(picker, layout[1], state);
}

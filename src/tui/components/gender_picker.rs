//! Default-styled segmented picker section.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
};
use segpick::{Fill, PickerState, PickerStyle, SegmentedPicker};

use crate::app::{Gender, PICKER_GENDER};
use crate::events::Action;
use crate::tui::interaction::InteractionRegistry;
use crate::tui::theme::*;

/// Render the default-style picker over the gender selection.
pub fn render_gender_picker(
    frame: &mut Frame,
    area: Rect,
    gender: Gender,
    state: &mut PickerState,
    interactions: &mut InteractionRegistry,
    focused: bool,
) {
    let layout = Layout::vertical([Constraint::Length(1), Constraint::Length(3)]).split(area);

    let marker = if focused { "▸ " } else { "  " };
    let title_style = if focused {
        Style::new().fg(ACCENT_BLUE).bold()
    } else {
        Style::new().fg(TEXT_DIM)
    };
    frame.render_widget(
        Line::from(vec![
            Span::styled(marker, title_style),
            Span::styled("Customizable picker", title_style),
        ]),
        layout[0],
    );

    let picker = SegmentedPicker::new(&Gender::ALL, &gender, move |item| {
        let style = if *item == gender {
            Style::new().fg(TEXT_WHITE).bold()
        } else {
            Style::new().fg(TEXT_DIM)
        };
        Line::from(Span::styled(item.label(), style))
    })
    .style(
        PickerStyle::default()
            .background_color(CONTROL_BG)
            .indicator_fill(Fill::Solid(ACCENT_BLUE)),
    );

    for index in 0..Gender::ALL.len() {
        if let Some(slot) = picker.slot_area(layout[1], index) {
            interactions.register_click(
                "gender_slot",
                slot.into(),
                Action::SelectSegment {
                    picker: PICKER_GENDER,
                    index,
                },
            );
        }
    }

    frame.render_stateful_widget(picker, layout[1], state);
}

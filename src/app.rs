//! Demo application state.
//!
//! The app owns the selections the pickers are bound to; the widgets read
//! them each frame and every mutation funnels through [`App::dispatch`].

use segpick::{PickerState, next_item, prev_item};

use crate::events::Action;
use crate::tui::interaction::InteractionRegistry;

/// Choices for the default and custom-indicator pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

/// Choices for the gradient picker. The last one is longer than its slot
/// on most terminal widths.
pub const INTERVALS: [&str; 4] = ["Hourly", "Daily", "Weekly", "Every Other Fortnight"];

/// Identifiers for the interactive picker sections, top to bottom.
pub const PICKER_GENDER: usize = 0;
pub const PICKER_INTERVAL: usize = 1;
pub const PICKER_UNDERLINE: usize = 2;
pub const PICKER_COUNT: usize = 3;

pub struct App {
    /// Selection shared by the default picker, the custom-indicator
    /// picker, and the native tab bar.
    pub gender: Gender,
    /// Selection of the gradient picker.
    pub interval: &'static str,
    /// Which picker section keyboard input targets.
    pub focus: usize,
    pub gender_state: PickerState,
    pub interval_state: PickerState,
    pub underline_state: PickerState,
    /// Click regions registered by the components each frame.
    pub interactions: InteractionRegistry,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            gender: Gender::Male,
            interval: INTERVALS[0],
            focus: PICKER_GENDER,
            gender_state: PickerState::new(),
            interval_state: PickerState::new(),
            underline_state: PickerState::new(),
            interactions: InteractionRegistry::new(),
            should_quit: false,
        }
    }

    /// Apply a dispatched action to the state.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::SelectSegment { picker, index } => self.select(picker, index),
            Action::NextSegment => self.cycle(true),
            Action::PrevSegment => self.cycle(false),
            Action::FocusNext => self.focus = (self.focus + 1) % PICKER_COUNT,
            Action::FocusPrev => {
                self.focus = self.focus.checked_sub(1).unwrap_or(PICKER_COUNT - 1);
            }
            Action::None => {}
        }
    }

    fn select(&mut self, picker: usize, index: usize) {
        match picker {
            PICKER_GENDER | PICKER_UNDERLINE => {
                if let Some(gender) = Gender::ALL.get(index) {
                    self.gender = *gender;
                }
            }
            PICKER_INTERVAL => {
                if let Some(interval) = INTERVALS.get(index) {
                    self.interval = interval;
                }
            }
            _ => {}
        }
    }

    /// Step the focused picker's selection, wrapping at either end.
    fn cycle(&mut self, forward: bool) {
        match self.focus {
            PICKER_GENDER | PICKER_UNDERLINE => {
                let next = if forward {
                    next_item(&Gender::ALL, &self.gender)
                } else {
                    prev_item(&Gender::ALL, &self.gender)
                };
                if let Some(gender) = next {
                    self.gender = *gender;
                }
            }
            PICKER_INTERVAL => {
                let next = if forward {
                    next_item(&INTERVALS, &self.interval)
                } else {
                    prev_item(&INTERVALS, &self.interval)
                };
                if let Some(interval) = next {
                    self.interval = interval;
                }
            }
            _ => {}
        }
    }

    /// Advance every picker's indicator animation.
    pub fn tick(&mut self, dt: f64) {
        self.gender_state.tick(dt);
        self.interval_state.tick(dt);
        self.underline_state.tick(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_action_writes_the_bound_selection() {
        let mut app = App::new();
        app.dispatch(Action::SelectSegment {
            picker: PICKER_GENDER,
            index: 1,
        });
        assert_eq!(app.gender, Gender::Female);

        // The custom-indicator picker writes the same binding.
        app.dispatch(Action::SelectSegment {
            picker: PICKER_UNDERLINE,
            index: 0,
        });
        assert_eq!(app.gender, Gender::Male);
    }

    #[test]
    fn out_of_range_click_index_is_ignored() {
        let mut app = App::new();
        app.dispatch(Action::SelectSegment {
            picker: PICKER_GENDER,
            index: 9,
        });
        assert_eq!(app.gender, Gender::Male);
    }

    #[test]
    fn cycling_wraps_both_ways() {
        let mut app = App::new();
        app.dispatch(Action::PrevSegment);
        assert_eq!(app.gender, Gender::Female, "wraps backward from the first");
        app.dispatch(Action::NextSegment);
        assert_eq!(app.gender, Gender::Male, "wraps forward from the last");
    }

    #[test]
    fn focus_moves_between_sections_and_wraps() {
        let mut app = App::new();
        app.dispatch(Action::FocusPrev);
        assert_eq!(app.focus, PICKER_UNDERLINE);
        app.dispatch(Action::FocusNext);
        assert_eq!(app.focus, PICKER_GENDER);

        app.dispatch(Action::FocusNext);
        assert_eq!(app.focus, PICKER_INTERVAL);
        app.dispatch(Action::NextSegment);
        assert_eq!(app.interval, "Daily");
        assert_eq!(app.gender, Gender::Male, "unfocused pickers don't move");
    }

    #[test]
    fn quit_sets_the_flag() {
        let mut app = App::new();
        app.dispatch(Action::Quit);
        assert!(app.should_quit);
    }
}

//! Action enum for decoupling input handling from state changes.

/// Actions that can be dispatched from event handlers.
///
/// These represent user intents and are processed by the App to update
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,

    /// Select segment `index` of picker `picker` (mouse click)
    SelectSegment { picker: usize, index: usize },

    /// Cycle the focused picker's selection forward
    NextSegment,
    /// Cycle the focused picker's selection backward
    PrevSegment,

    /// Move focus to the next picker section
    FocusNext,
    /// Move focus to the previous picker section
    FocusPrev,

    /// No action to take
    None,
}

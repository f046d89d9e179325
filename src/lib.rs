//! Customizable segmented picker widget for ratatui.
//!
//! [`SegmentedPicker`] lays a list of items out as equal-width slots in a
//! horizontal row and slides an animated indicator behind whichever item
//! equals the caller-owned selection. Styling (background, solid or
//! gradient indicator fill, paddings, corner rounding, dimensions) comes
//! from a [`PickerStyle`] value; a fully custom indicator can replace the
//! default via [`SegmentedPicker::indicator`].
//!
//! The selection is never owned by the widget: it reads a `&T` each frame
//! and writes through `&mut T` on [`SegmentedPicker::on_click`]. Keep a
//! [`PickerState`] per picker and tick it from your event loop to drive
//! the spring animation:
//!
//! ```ignore
//! let picker = SegmentedPicker::new(&SOURCES, &app.choice, |item| {
//!     Line::from(item.label())
//! });
//! frame.render_stateful_widget(picker, area, &mut app.choice_state);
//! // in the tick arm of the event loop:
//! app.choice_state.tick(dt);
//! ```
//!
//! Degenerate inputs are not errors: an empty source list renders only
//! the background, and a selection missing from the list renders no
//! indicator while the slots stay visible and clickable.

pub mod geometry;
mod picker;
mod selection;
mod spring;
mod state;
mod style;

pub use picker::SegmentedPicker;
pub use selection::{next_item, prev_item};
pub use spring::Spring;
pub use state::PickerState;
pub use style::{Fill, PickerStyle};

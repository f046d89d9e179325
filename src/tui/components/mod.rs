//! UI components for the demo screen.
//!
//! # Component Organization
//!
//! - `header` - Title and subtitle
//! - `gender_picker` - Segmented picker with the default style
//! - `interval_picker` - Gradient fill, explicit width, square corners
//! - `underline_picker` - Fully custom indicator, shared selection
//! - `native_tabs` - ratatui's built-in `Tabs` bound to the same state
//! - `hotkeys` - Key hint bar

mod gender_picker;
mod header;
mod hotkeys;
mod interval_picker;
mod native_tabs;
mod underline_picker;

// Re-export all render functions for use in ui.rs
pub use gender_picker::render_gender_picker;
pub use header::render_header;
pub use hotkeys::render_hotkeys;
pub use interval_picker::render_interval_picker;
pub use native_tabs::render_native_tabs;
pub use underline_picker::render_underline_picker;

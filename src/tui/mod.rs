//! Terminal UI for the demo: screen layout, components, theme, and mouse
//! interactivity.

pub mod components;
pub mod interaction;
pub mod theme;
pub mod ui;

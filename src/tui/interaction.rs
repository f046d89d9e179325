//! Component-level mouse interactivity.
//!
//! Components register their clickable regions during each render, and
//! the mouse handler queries this registry to dispatch events. The
//! registry is rebuilt every frame, so regions always match the layout
//! that is actually on screen.

use ratatui::layout::Rect;

use crate::events::Action;

/// Rectangular screen region used for mouse hit testing.
#[derive(Debug, Clone, Copy)]
pub struct ClickRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClickRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if a point is within this region's bounds
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

impl From<Rect> for ClickRegion {
    fn from(rect: Rect) -> Self {
        Self::new(rect.x, rect.y, rect.width, rect.height)
    }
}

/// A clickable region with the action it dispatches.
#[derive(Debug, Clone)]
struct InteractiveRegion {
    /// Identifier for debugging/logging
    #[allow(dead_code)]
    id: &'static str,
    bounds: ClickRegion,
    on_click: Action,
}

/// Registry of clickable regions, rebuilt each frame during render.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    regions: Vec<InteractiveRegion>,
}

impl InteractionRegistry {
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// Clear all registered regions (call at start of each render)
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Register a clickable region
    pub fn register_click(&mut self, id: &'static str, bounds: ClickRegion, action: Action) {
        self.regions.push(InteractiveRegion {
            id,
            bounds,
            on_click: action,
        });
    }

    /// Find the action to dispatch for a click at (x, y).
    ///
    /// Returns the action of the first registered region containing the
    /// point; the demo's regions never overlap.
    pub fn handle_click(&self, x: u16, y: u16) -> Action {
        self.regions
            .iter()
            .find(|r| r.bounds.contains(x, y))
            .map(|r| r.on_click)
            .unwrap_or(Action::None)
    }
}

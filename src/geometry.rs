//! Slot geometry for the segmented row.
//!
//! All slots share the available width equally: slot `i` of `n` starts at
//! `i * (width / n)` columns from the row's left edge. The fractional
//! functions here are the exact contract; [`slot_rect`] snaps edges to
//! whole cells so adjacent slots tile the row without gaps.

use ratatui::layout::{Position, Rect};

/// Width of a single slot, in fractional columns.
pub fn slot_width(total: u16, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    f64::from(total) / count as f64
}

/// Horizontal offset of the indicator for the slot at `index`, in
/// fractional columns from the row's left edge.
pub fn indicator_offset(total: u16, count: usize, index: usize) -> f64 {
    slot_width(total, count) * index as f64
}

/// Cell-snapped rectangle of slot `index` within `area`.
///
/// Edges snap upward to whole columns. That keeps the tiling gapless and
/// makes a slot's cells exactly the ones [`hit_index`] maps back to it,
/// including when the width doesn't divide evenly.
pub fn slot_rect(area: Rect, count: usize, index: usize) -> Rect {
    if count == 0 || index >= count {
        return Rect::new(area.x, area.y, 0, area.height);
    }
    let width = slot_width(area.width, count);
    let left = (width * index as f64).ceil() as u16;
    let right = ((width * (index + 1) as f64).ceil() as u16).min(area.width);
    Rect::new(area.x + left, area.y, right.saturating_sub(left), area.height)
}

/// Map a screen coordinate to the slot it falls in.
///
/// The hit target is the full slot rectangle, independent of how much of
/// it the rendered content occupies. Returns `None` outside the row.
pub fn hit_index(area: Rect, count: usize, x: u16, y: u16) -> Option<usize> {
    if count == 0 || !area.contains(Position::new(x, y)) {
        return None;
    }
    let index = (f64::from(x - area.x) / slot_width(area.width, count)) as usize;
    Some(index.min(count - 1))
}

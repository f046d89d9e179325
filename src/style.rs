//! Style configuration for the picker.
//!
//! [`PickerStyle`] is a plain value: every builder method returns a
//! modified copy, so deriving several styles from one default can never
//! make them interfere.

use ratatui::style::Color;
use ratatui::widgets::Padding;

/// Fill of the default indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fill {
    Solid(Color),
    /// Horizontal two-stop gradient, `from` at the left edge to `to` at
    /// the right.
    Gradient { from: Color, to: Color },
}

impl Fill {
    /// Color at position `t` in `[0, 1]` across the indicator's width.
    pub fn color_at(&self, t: f64) -> Color {
        match *self {
            Fill::Solid(color) => color,
            Fill::Gradient { from, to } => blend(from, to, t),
        }
    }
}

fn rgb(color: Color) -> Option<(u8, u8, u8)> {
    match color {
        Color::Rgb(r, g, b) => Some((r, g, b)),
        _ => None,
    }
}

/// Interpolate between two colors. Only RGB colors can be mixed; palette
/// colors switch over at the midpoint.
fn blend(from: Color, to: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (rgb(from), rgb(to)) {
        (Some((r0, g0, b0)), Some((r1, g1, b1))) => {
            let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
            Color::Rgb(mix(r0, r1), mix(g0, g1), mix(b0, b1))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}

/// Presentation parameters for a [`SegmentedPicker`](crate::SegmentedPicker).
///
/// Corner radius maps onto the cell grid as square (`0`) versus rounded
/// (`>= 1`) border glyphs and indicator end caps; the numeric knob is kept
/// for callers that share style values across frontends.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerStyle {
    /// Total control height in rows. Controls at least 3 rows tall draw a
    /// border around the background; shorter ones are a plain fill.
    pub height: u16,
    /// Explicit width override. `None` takes the full container width.
    pub width: Option<u16>,
    pub corner_radius: u16,
    pub background_color: Color,
    pub indicator_fill: Fill,
    /// Inset of the default indicator from its slot's bounds.
    pub indicator_padding: Padding,
    /// Inset of the slot row from the control's background.
    pub inner_padding: Padding,
}

impl Default for PickerStyle {
    fn default() -> Self {
        Self {
            height: 3,
            width: None,
            corner_radius: 1,
            background_color: Color::Rgb(40, 40, 40),
            indicator_fill: Fill::Solid(Color::Blue),
            indicator_padding: Padding::ZERO,
            inner_padding: Padding::horizontal(1),
        }
    }
}

impl PickerStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn height(mut self, height: u16) -> Self {
        self.height = height;
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn corner_radius(mut self, radius: u16) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    pub fn indicator_fill(mut self, fill: Fill) -> Self {
        self.indicator_fill = fill;
        self
    }

    pub fn indicator_padding(mut self, padding: Padding) -> Self {
        self.indicator_padding = padding;
        self
    }

    pub fn inner_padding(mut self, padding: Padding) -> Self {
        self.inner_padding = padding;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_return_independent_copies() {
        let base = PickerStyle::default();
        let rounded = base.clone().corner_radius(7);
        let very_rounded = base.clone().corner_radius(20);

        assert_eq!(base.corner_radius, 1);
        assert_eq!(rounded.corner_radius, 7);
        assert_eq!(very_rounded.corner_radius, 20);
        assert_ne!(rounded, very_rounded);
    }

    #[test]
    fn solid_fill_ignores_position() {
        let fill = Fill::Solid(Color::Blue);
        assert_eq!(fill.color_at(0.0), Color::Blue);
        assert_eq!(fill.color_at(1.0), Color::Blue);
    }

    #[test]
    fn gradient_hits_both_endpoints() {
        let fill = Fill::Gradient {
            from: Color::Rgb(0, 0, 0),
            to: Color::Rgb(200, 100, 50),
        };
        assert_eq!(fill.color_at(0.0), Color::Rgb(0, 0, 0));
        assert_eq!(fill.color_at(1.0), Color::Rgb(200, 100, 50));
        assert_eq!(fill.color_at(0.5), Color::Rgb(100, 50, 25));
    }

    #[test]
    fn gradient_of_palette_colors_switches_at_midpoint() {
        let fill = Fill::Gradient {
            from: Color::Blue,
            to: Color::Red,
        };
        assert_eq!(fill.color_at(0.2), Color::Blue);
        assert_eq!(fill.color_at(0.8), Color::Red);
    }
}

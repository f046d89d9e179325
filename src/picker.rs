//! The segmented picker widget.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, StatefulWidget, Widget};

use crate::geometry;
use crate::state::PickerState;
use crate::style::PickerStyle;

type ItemBuilder<'a, T> = Box<dyn Fn(&T) -> Line<'a> + 'a>;
type IndicatorBuilder<'a> = Box<dyn Fn(Rect, &mut Buffer) + 'a>;

/// A horizontal row of equal-width selectable slots with an animated
/// indicator behind the selected one.
///
/// The widget is rebuilt every frame around a caller-owned selection and
/// rendered with [`PickerState`] holding the animation between frames:
///
/// ```ignore
/// let picker = SegmentedPicker::new(&GENDERS, &app.gender, |g| {
///     Line::from(g.label())
/// })
/// .style(PickerStyle::default().corner_radius(0));
/// frame.render_stateful_widget(picker, area, &mut app.gender_state);
/// ```
///
/// A selection value that is not in `sources` simply renders no
/// indicator; the slots stay visible and clickable.
pub struct SegmentedPicker<'a, T> {
    sources: &'a [T],
    selection: &'a T,
    item_builder: ItemBuilder<'a, T>,
    indicator_builder: Option<IndicatorBuilder<'a>>,
    style: PickerStyle,
}

impl<'a, T: PartialEq> SegmentedPicker<'a, T> {
    /// Build a picker over `sources` with the current `selection` and a
    /// per-item renderer. The renderer runs once per slot per frame and
    /// should be cheap; it may capture the selection to highlight the
    /// active item.
    pub fn new(
        sources: &'a [T],
        selection: &'a T,
        item_builder: impl Fn(&T) -> Line<'a> + 'a,
    ) -> Self {
        Self {
            sources,
            selection,
            item_builder: Box::new(item_builder),
            indicator_builder: None,
            style: PickerStyle::default(),
        }
    }

    pub fn style(mut self, style: PickerStyle) -> Self {
        self.style = style;
        self
    }

    /// Replace the default filled indicator entirely. The closure receives
    /// the same computed placement rectangle the default would occupy,
    /// already inset by the indicator padding.
    pub fn indicator(mut self, builder: impl Fn(Rect, &mut Buffer) + 'a) -> Self {
        self.indicator_builder = Some(Box::new(builder));
        self
    }

    /// The rectangle the control occupies within `area`, after applying
    /// the configured width and height.
    fn control_area(&self, area: Rect) -> Rect {
        Rect {
            x: area.x,
            y: area.y,
            width: self.style.width.map_or(area.width, |w| w.min(area.width)),
            height: self.style.height.min(area.height),
        }
    }

    fn background(&self, bordered: bool) -> Block<'static> {
        let mut block = Block::new()
            .style(Style::new().bg(self.style.background_color))
            .padding(self.style.inner_padding);
        if bordered {
            let corners = if self.style.corner_radius == 0 {
                BorderType::Plain
            } else {
                BorderType::Rounded
            };
            block = block.borders(Borders::ALL).border_type(corners);
        }
        block
    }

    /// The row of slots inside the background and padding.
    fn slot_row(&self, area: Rect) -> Rect {
        let control = self.control_area(area);
        if control.width == 0 || control.height == 0 {
            return Rect::new(control.x, control.y, 0, 0);
        }
        self.background(control.height >= 3).inner(control)
    }

    /// Cell-snapped rectangle of slot `index`, for hit-region
    /// registration.
    pub fn slot_area(&self, area: Rect, index: usize) -> Option<Rect> {
        let row = self.slot_row(area);
        if index >= self.sources.len() || row.height == 0 {
            return None;
        }
        let slot = geometry::slot_rect(row, self.sources.len(), index);
        (slot.width > 0).then_some(slot)
    }

    /// Which slot a screen coordinate falls in. The hit target is the
    /// full slot rectangle, not just the rendered label.
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        geometry::hit_index(self.slot_row(area), self.sources.len(), x, y)
    }
}

impl<T: PartialEq + Clone> SegmentedPicker<'_, T> {
    /// Write the clicked slot's item into the caller-owned selection.
    /// Returns whether the click landed on a slot.
    pub fn on_click(&self, area: Rect, x: u16, y: u16, selection: &mut T) -> bool {
        match self.hit_test(area, x, y) {
            Some(index) => {
                *selection = self.sources[index].clone();
                true
            }
            None => false,
        }
    }
}

impl<T: PartialEq> StatefulWidget for SegmentedPicker<'_, T> {
    type State = PickerState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut PickerState) {
        let control = self.control_area(area);
        if control.width == 0 || control.height == 0 {
            return;
        }

        let block = self.background(control.height >= 3);
        let inner = block.inner(control);
        block.render(control, buf);

        let count = self.sources.len();
        if count == 0 || inner.width == 0 || inner.height == 0 {
            state.sync(None, 0.0);
            return;
        }

        let selected = self
            .sources
            .iter()
            .position(|item| item == self.selection);
        let target = selected
            .map(|index| geometry::indicator_offset(inner.width, count, index))
            .unwrap_or_default();
        state.sync(selected, target);

        if let Some(offset) = state.offset()
            && let Some(rect) = indicator_rect(inner, count, offset, &self.style)
        {
            match &self.indicator_builder {
                Some(build) => build(rect, buf),
                None => render_default_indicator(rect, &self.style, buf),
            }
        }

        let row_y = inner.y + (inner.height - 1) / 2;
        for (index, item) in self.sources.iter().enumerate() {
            let slot = geometry::slot_rect(inner, count, index);
            if slot.width == 0 {
                continue;
            }
            let line = (self.item_builder)(item);
            let x = slot.x + slot.width.saturating_sub(line.width() as u16) / 2;
            buf.set_line(x, row_y, &line, slot.right().saturating_sub(x));
        }
    }
}

/// Place the indicator: one slot wide at the spring's current offset,
/// inset by the indicator padding. `None` when the padding swallows it.
fn indicator_rect(inner: Rect, count: usize, offset: f64, style: &PickerStyle) -> Option<Rect> {
    let width = (geometry::slot_width(inner.width, count).round() as u16).clamp(1, inner.width);
    let x = offset.clamp(0.0, f64::from(inner.width - width)).round() as u16;

    let pad = style.indicator_padding;
    if width <= pad.left + pad.right || inner.height <= pad.top + pad.bottom {
        return None;
    }
    Some(Rect::new(
        inner.x + x + pad.left,
        inner.y + pad.top,
        width - pad.left - pad.right,
        inner.height - pad.top - pad.bottom,
    ))
}

/// Paint the default indicator as cell backgrounds so item content stays
/// legible on top. Rounded corner styles get half-block end caps.
fn render_default_indicator(rect: Rect, style: &PickerStyle, buf: &mut Buffer) {
    if rect.width == 0 || rect.height == 0 {
        return;
    }
    let span = f64::from(rect.width.saturating_sub(1).max(1));
    for (step, x) in (rect.left()..rect.right()).enumerate() {
        let color = style.indicator_fill.color_at(step as f64 / span);
        for y in rect.top()..rect.bottom() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_bg(color);
            }
        }
    }

    if style.corner_radius >= 1 && rect.width >= 2 {
        let (left, right) = (rect.left(), rect.right() - 1);
        for y in rect.top()..rect.bottom() {
            if let Some(cell) = buf.cell_mut((left, y)) {
                cell.set_symbol("▐")
                    .set_fg(style.indicator_fill.color_at(0.0))
                    .set_bg(style.background_color);
            }
            if let Some(cell) = buf.cell_mut((right, y)) {
                cell.set_symbol("▌")
                    .set_fg(style.indicator_fill.color_at(1.0))
                    .set_bg(style.background_color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;
    use ratatui::widgets::Padding;

    use crate::style::Fill;

    const GENDERS: [&str; 2] = ["Male", "Female"];

    const ACCENT: Color = Color::Rgb(10, 120, 200);

    fn test_style() -> PickerStyle {
        // Square corners keep every indicator cell a plain background
        // fill, which makes the assertions below direct.
        PickerStyle::default()
            .corner_radius(0)
            .indicator_fill(Fill::Solid(ACCENT))
    }

    fn render(
        selection: &&'static str,
        state: &mut PickerState,
        style: PickerStyle,
        width: u16,
    ) -> Buffer {
        let mut buf = Buffer::empty(Rect::new(0, 0, width, 3));
        let picker = SegmentedPicker::new(&GENDERS, selection, |item| Line::from(*item))
            .style(style);
        picker.render(buf.area, &mut buf, state);
        buf
    }

    fn indicator_columns(buf: &Buffer, y: u16) -> Vec<u16> {
        (0..buf.area.width)
            .filter(|&x| buf[(x, y)].style().bg == Some(ACCENT))
            .collect()
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn indicator_sits_under_the_selected_slot() {
        let mut state = PickerState::new();
        // 32 wide, bordered + 1 col padding each side: 28-column row,
        // 14 columns per slot starting at x = 2.
        let buf = render(&"Male", &mut state, test_style(), 32);
        assert_eq!(indicator_columns(&buf, 1), (2..16).collect::<Vec<_>>());
    }

    #[test]
    fn items_render_on_top_of_the_indicator() {
        let mut state = PickerState::new();
        let buf = render(&"Male", &mut state, test_style(), 32);
        let row = row_text(&buf, 1);
        assert!(row.contains("Male"), "row was {row:?}");
        assert!(row.contains("Female"), "row was {row:?}");
        // "Male" is centered in slot 0 (columns 2..16) and its cells keep
        // the indicator's background.
        assert_eq!(buf[(7, 1)].symbol(), "M");
        assert_eq!(buf[(7, 1)].style().bg, Some(ACCENT));
    }

    #[test]
    fn selection_change_slides_after_settling() {
        let mut state = PickerState::new();
        render(&"Male", &mut state, test_style(), 32);

        // First frame after the change still shows the old position.
        let buf = render(&"Female", &mut state, test_style(), 32);
        assert!(state.is_animating());
        assert_eq!(indicator_columns(&buf, 1)[0], 2);

        for _ in 0..600 {
            state.tick(1.0 / 60.0);
        }
        let buf = render(&"Female", &mut state, test_style(), 32);
        assert!(!state.is_animating());
        assert_eq!(indicator_columns(&buf, 1), (16..30).collect::<Vec<_>>());
    }

    #[test]
    fn unmatched_selection_renders_no_indicator() {
        let mut state = PickerState::new();
        let buf = render(&"Other", &mut state, test_style(), 32);
        assert!(indicator_columns(&buf, 1).is_empty());
        // Slots still render and stay clickable.
        assert!(row_text(&buf, 1).contains("Male"));
        let picker =
            SegmentedPicker::new(&GENDERS, &"Other", |item| Line::from(*item)).style(test_style());
        assert_eq!(picker.hit_test(buf.area, 4, 1), Some(0));
    }

    #[test]
    fn empty_sources_render_only_the_background() {
        let sources: [&str; 0] = [];
        let mut state = PickerState::new();
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 3));
        let picker = SegmentedPicker::new(&sources, &"x", |item| Line::from(*item))
            .style(test_style());
        picker.render(buf.area, &mut buf, &mut state);
        assert!(indicator_columns(&buf, 1).is_empty());
        assert_eq!(
            buf[(1, 1)].style().bg,
            Some(PickerStyle::default().background_color)
        );
    }

    #[test]
    fn click_anywhere_in_a_slot_selects_it() {
        let area = Rect::new(0, 0, 32, 3);
        let mut selection = "Male";
        let picker = SegmentedPicker::new(&GENDERS, &"Male", |item| Line::from(*item))
            .style(test_style());
        // Far corner of slot 1's cell, well away from its label.
        assert!(picker.on_click(area, 29, 1, &mut selection));
        assert_eq!(selection, "Female");
        // The border is not part of any slot.
        let mut selection = "Male";
        assert!(!picker.on_click(area, 0, 0, &mut selection));
        assert_eq!(selection, "Male");
    }

    #[test]
    fn custom_indicator_receives_the_computed_placement() {
        use std::cell::Cell;

        let seen = Cell::new(None);
        let mut state = PickerState::new();
        let mut buf = Buffer::empty(Rect::new(0, 0, 32, 3));
        let picker = SegmentedPicker::new(&GENDERS, &"Female", |item| Line::from(*item))
            .style(test_style())
            .indicator(|rect, _| seen.set(Some(rect)));
        picker.render(buf.area, &mut buf, &mut state);

        assert_eq!(seen.get(), Some(Rect::new(16, 1, 14, 1)));
        // The default fill must not have been painted.
        assert!(indicator_columns(&buf, 1).is_empty());
    }

    #[test]
    fn explicit_width_and_height_clamp_the_control() {
        let mut state = PickerState::new();
        let style = test_style().width(20).height(1);
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 3));
        let picker = SegmentedPicker::new(&GENDERS, &"Male", |item| Line::from(*item))
            .style(style);
        picker.render(buf.area, &mut buf, &mut state);
        // Single-row controls have no border; padding still applies.
        assert_eq!(indicator_columns(&buf, 0), (1..10).collect::<Vec<_>>());
        // Nothing paints past the explicit width.
        for x in 20..40 {
            assert_eq!(buf[(x, 0)].style().bg, Some(Color::Reset));
        }
    }

    #[test]
    fn indicator_padding_insets_the_fill() {
        let mut state = PickerState::new();
        let style = test_style().indicator_padding(Padding::horizontal(2));
        let buf = render(&"Male", &mut state, style, 32);
        assert_eq!(indicator_columns(&buf, 1), (4..14).collect::<Vec<_>>());
    }

    #[test]
    fn zero_area_is_a_no_op() {
        let mut state = PickerState::new();
        let mut buf = Buffer::empty(Rect::new(0, 0, 0, 0));
        let picker = SegmentedPicker::new(&GENDERS, &"Male", |item| Line::from(*item));
        picker.render(buf.area, &mut buf, &mut state);
    }
}

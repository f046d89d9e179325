//! Retained picker state.
//!
//! The widget itself is rebuilt every frame; the only thing that survives
//! between frames is this state, which tracks the last selected index and
//! drives the indicator spring. Index diffing decides whether a frame
//! snaps, animates, or hides the indicator.

use crate::spring::Spring;

/// Animation state for one [`SegmentedPicker`](crate::SegmentedPicker).
///
/// Keep one instance per on-screen picker and feed it to
/// `render_stateful_widget`. Call [`tick`](PickerState::tick) from the
/// application's animation tick to advance the indicator while
/// [`is_animating`](PickerState::is_animating) reports motion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PickerState {
    spring: Option<Spring>,
    tracked: Option<usize>,
}

impl PickerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconcile with the selection observed during this render pass.
    ///
    /// `index` is the selected slot (if the selection matched the source
    /// list) and `target` its indicator offset in columns.
    ///
    /// - first sighting after construction or an unmatched frame: snap,
    ///   the indicator appears in place without animating
    /// - same index, different target: the container was resized, snap
    /// - changed index: animate
    /// - no index: the selection is not in the list, hide the indicator
    pub(crate) fn sync(&mut self, index: Option<usize>, target: f64) {
        let Some(index) = index else {
            self.spring = None;
            self.tracked = None;
            return;
        };
        match (self.spring.as_mut(), self.tracked) {
            (Some(spring), Some(tracked)) if tracked == index => {
                if spring.target() != target {
                    spring.snap_to(target);
                }
            }
            (Some(spring), Some(_)) => spring.set_target(target),
            _ => self.spring = Some(Spring::new(target)),
        }
        self.tracked = Some(index);
    }

    /// Indicator offset for the current frame, if the indicator is
    /// visible.
    pub(crate) fn offset(&self) -> Option<f64> {
        self.spring.as_ref().map(Spring::value)
    }

    /// Advance the indicator animation by `dt` seconds.
    pub fn tick(&mut self, dt: f64) {
        if let Some(spring) = self.spring.as_mut() {
            spring.tick(dt);
        }
    }

    /// True while the indicator is still in flight.
    pub fn is_animating(&self) -> bool {
        self.spring.as_ref().is_some_and(|s| !s.is_settled())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sighting_snaps_without_animating() {
        let mut state = PickerState::new();
        state.sync(Some(2), 20.0);
        assert_eq!(state.offset(), Some(20.0));
        assert!(!state.is_animating());
    }

    #[test]
    fn index_change_animates() {
        let mut state = PickerState::new();
        state.sync(Some(0), 0.0);
        state.sync(Some(1), 15.0);
        assert!(state.is_animating());
        assert_eq!(state.offset(), Some(0.0), "motion starts from the old slot");
        for _ in 0..600 {
            state.tick(1.0 / 60.0);
        }
        assert!(!state.is_animating());
        assert_eq!(state.offset(), Some(15.0));
    }

    #[test]
    fn resize_snaps_instead_of_animating() {
        let mut state = PickerState::new();
        state.sync(Some(1), 15.0);
        // Same index, new geometry.
        state.sync(Some(1), 40.0);
        assert_eq!(state.offset(), Some(40.0));
        assert!(!state.is_animating());
    }

    #[test]
    fn unmatched_selection_hides_the_indicator() {
        let mut state = PickerState::new();
        state.sync(Some(1), 15.0);
        state.sync(None, 0.0);
        assert_eq!(state.offset(), None);
        assert!(!state.is_animating());
    }

    #[test]
    fn reappearing_after_unmatched_snaps() {
        let mut state = PickerState::new();
        state.sync(Some(0), 0.0);
        state.sync(None, 0.0);
        state.sync(Some(3), 45.0);
        assert_eq!(state.offset(), Some(45.0));
        assert!(!state.is_animating());
    }
}

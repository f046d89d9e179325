//! Wrap-around selection stepping.
//!
//! The picker's selection lives with the caller as a plain value. These
//! helpers give keyboard users the same transition a click performs:
//! find the current value in the source list and step to its neighbor,
//! wrapping at either end.

/// The item after `current`, wrapping to the first past the end.
///
/// Returns `None` when the list is empty or `current` is not in it.
pub fn next_item<'a, T: PartialEq>(sources: &'a [T], current: &T) -> Option<&'a T> {
    let index = sources.iter().position(|item| item == current)?;
    sources.get((index + 1) % sources.len())
}

/// The item before `current`, wrapping to the last before the start.
pub fn prev_item<'a, T: PartialEq>(sources: &'a [T], current: &T) -> Option<&'a T> {
    let index = sources.iter().position(|item| item == current)?;
    sources.get(index.checked_sub(1).unwrap_or(sources.len() - 1))
}

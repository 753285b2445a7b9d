// SPDX-License-Identifier: MPL-2.0
//! Lightbox state machine for modal gallery viewing.
//!
//! The lightbox is either closed or open over an ordered set of images.
//! While open, navigation wraps around in both directions so no out-of-range
//! index is ever observable. Operations invoked in the wrong state are silent
//! no-ops; stray events (a leftover arrow key press, a double close) must
//! never corrupt the state.

use std::path::{Path, PathBuf};

/// Modal viewer state: closed, or open over a fixed list of images.
///
/// The item list is captured when the lightbox opens and stays untouched
/// until it closes; only the index moves.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Lightbox {
    #[default]
    Closed,
    Open { items: Vec<PathBuf>, index: usize },
}

impl Lightbox {
    /// Creates a new closed lightbox.
    pub fn new() -> Self {
        Self::Closed
    }

    /// Opens the lightbox over `items`, starting at `index`.
    ///
    /// Does nothing when already open or when `items` is empty — an open
    /// lightbox with nothing to show is not a representable state. An
    /// out-of-range start index is wrapped into range rather than rejected.
    pub fn open(&mut self, items: Vec<PathBuf>, index: usize) {
        if matches!(self, Self::Open { .. }) || items.is_empty() {
            return;
        }

        let index = index % items.len();
        *self = Self::Open { items, index };
    }

    /// Closes the lightbox, discarding the captured items.
    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    /// Advances to the next image, wrapping from the last back to the first.
    pub fn next(&mut self) {
        if let Self::Open { items, index } = self {
            *index = (*index + 1) % items.len();
        }
    }

    /// Steps back to the previous image, wrapping from the first to the last.
    pub fn previous(&mut self) {
        if let Self::Open { items, index } = self {
            *index = (*index + items.len() - 1) % items.len();
        }
    }

    /// Whether the lightbox is currently open.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// The image currently shown, if open.
    pub fn current(&self) -> Option<&Path> {
        match self {
            Self::Open { items, index } => items.get(*index).map(PathBuf::as_path),
            Self::Closed => None,
        }
    }

    /// Current position as `(index, total)`, if open. Used by the position
    /// counter in the overlay.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Self::Open { items, index } => Some((*index, items.len())),
            Self::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn new_lightbox_is_closed() {
        let lightbox = Lightbox::new();
        assert!(!lightbox.is_open());
        assert_eq!(lightbox.current(), None);
        assert_eq!(lightbox.position(), None);
    }

    #[test]
    fn open_with_empty_items_stays_closed() {
        let mut lightbox = Lightbox::new();
        lightbox.open(Vec::new(), 0);
        assert!(!lightbox.is_open());

        lightbox.open(Vec::new(), 7);
        assert!(!lightbox.is_open());
    }

    #[test]
    fn open_normalizes_out_of_range_index() {
        let mut lightbox = Lightbox::new();
        lightbox.open(items(&["a", "b", "c"]), 7);
        assert_eq!(lightbox.position(), Some((1, 3)));
    }

    #[test]
    fn open_while_open_is_a_no_op() {
        let mut lightbox = Lightbox::new();
        lightbox.open(items(&["a", "b"]), 1);
        lightbox.open(items(&["x", "y", "z"]), 0);

        assert_eq!(lightbox.current(), Some(Path::new("b")));
    }

    #[test]
    fn close_discards_items() {
        let mut lightbox = Lightbox::new();
        lightbox.open(items(&["a", "b"]), 0);
        lightbox.close();

        assert_eq!(lightbox, Lightbox::Closed);
    }

    #[test]
    fn navigation_while_closed_is_a_no_op() {
        let mut lightbox = Lightbox::new();
        lightbox.next();
        lightbox.previous();
        lightbox.close();

        assert_eq!(lightbox, Lightbox::Closed);
    }

    #[test]
    fn previous_wraps_to_last_and_next_wraps_back() {
        let mut lightbox = Lightbox::new();
        lightbox.open(items(&["a", "b", "c", "d"]), 0);

        lightbox.previous();
        assert_eq!(lightbox.position(), Some((3, 4)));

        lightbox.next();
        assert_eq!(lightbox.position(), Some((0, 4)));
    }

    #[test]
    fn next_called_len_times_closes_the_cycle() {
        for start in 0..5 {
            let mut lightbox = Lightbox::new();
            lightbox.open(items(&["a", "b", "c", "d", "e"]), start);

            for _ in 0..5 {
                lightbox.next();
            }
            assert_eq!(lightbox.position(), Some((start, 5)));
        }
    }

    #[test]
    fn previous_called_len_times_closes_the_cycle() {
        for start in 0..5 {
            let mut lightbox = Lightbox::new();
            lightbox.open(items(&["a", "b", "c", "d", "e"]), start);

            for _ in 0..5 {
                lightbox.previous();
            }
            assert_eq!(lightbox.position(), Some((start, 5)));
        }
    }

    #[test]
    fn next_then_previous_round_trips_from_any_index() {
        for start in 0..4 {
            let mut lightbox = Lightbox::new();
            lightbox.open(items(&["a", "b", "c", "d"]), start);

            lightbox.next();
            lightbox.previous();
            assert_eq!(lightbox.position(), Some((start, 4)));

            lightbox.previous();
            lightbox.next();
            assert_eq!(lightbox.position(), Some((start, 4)));
        }
    }

    #[test]
    fn single_item_navigation_stays_put() {
        let mut lightbox = Lightbox::new();
        lightbox.open(items(&["only"]), 0);

        lightbox.next();
        assert_eq!(lightbox.position(), Some((0, 1)));
        lightbox.previous();
        assert_eq!(lightbox.position(), Some((0, 1)));
    }

    #[test]
    fn index_never_leaves_bounds_under_a_long_walk() {
        let mut lightbox = Lightbox::new();
        lightbox.open(items(&["a", "b", "c"]), 2);

        for step in 0..100 {
            if step % 3 == 0 {
                lightbox.previous();
            } else {
                lightbox.next();
            }
            let (index, total) = lightbox.position().expect("still open");
            assert!(index < total);
        }
    }

    #[test]
    fn current_tracks_the_index() {
        let mut lightbox = Lightbox::new();
        lightbox.open(items(&["a", "b", "c"]), 1);
        assert_eq!(lightbox.current(), Some(Path::new("b")));

        lightbox.next();
        assert_eq!(lightbox.current(), Some(Path::new("c")));

        lightbox.next();
        assert_eq!(lightbox.current(), Some(Path::new("a")));
    }
}

//! Per-item frame storage indexed by item position.
//!
//! Slots are cleared and resized at the start of each pass rather than
//! reallocated, so a container relaid out with a similar child count does not
//! allocate.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use flowrow_core::geometry::Frame;

/// Frames keyed by item index; hidden items have no frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrameArena {
    slots: Vec<Option<Frame>>,
}

impl FrameArena {
    /// Empty arena.
    #[must_use]
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Empty arena with room for `capacity` items.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }

    /// Drop every frame and size the arena for `len` items, keeping the
    /// allocation.
    pub fn reset(&mut self, len: usize) {
        self.slots.clear();
        self.slots.resize(len, None);
    }

    /// Number of item slots (visible or not).
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the arena has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of items that carry a frame.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Frame of the item at `index`, if it has one.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Frame> {
        self.slots.get(index).copied().flatten()
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Frame> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    /// Store a frame, growing the arena if `index` is past the end.
    pub fn set(&mut self, index: usize, frame: Frame) {
        if index >= self.slots.len() {
            self.slots.resize(index + 1, None);
        }
        self.slots[index] = Some(frame);
    }

    /// `(index, frame)` pairs in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Frame)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.map(|frame| (index, frame)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_clears_and_keeps_capacity() {
        let mut arena = FrameArena::with_capacity(8);
        arena.set(2, Frame::new(0, 0, 10, 10));
        let capacity = arena.slots.capacity();

        arena.reset(4);
        assert_eq!(arena.len(), 4);
        assert_eq!(arena.frame_count(), 0);
        assert_eq!(arena.get(2), None);
        assert_eq!(arena.slots.capacity(), capacity);
    }

    #[test]
    fn set_grows_and_iter_skips_holes() {
        let mut arena = FrameArena::new();
        arena.set(3, Frame::new(1, 2, 3, 4));
        arena.set(0, Frame::new(0, 0, 1, 1));
        assert_eq!(arena.len(), 4);
        let pairs: Vec<_> = arena.iter().collect();
        assert_eq!(
            pairs,
            vec![(0, Frame::new(0, 0, 1, 1)), (3, Frame::new(1, 2, 3, 4))]
        );
    }

    #[test]
    fn get_out_of_range_is_none() {
        let arena = FrameArena::new();
        assert!(arena.is_empty());
        assert_eq!(arena.get(10), None);
    }

    #[test]
    fn get_mut_edits_in_place() {
        let mut arena = FrameArena::new();
        arena.set(0, Frame::new(0, 0, 4, 4));
        if let Some(frame) = arena.get_mut(0) {
            frame.set(1, 1, 5, 5);
        }
        assert_eq!(arena.get(0), Some(Frame::new(1, 1, 5, 5)));
        assert!(arena.get_mut(1).is_none());
    }
}

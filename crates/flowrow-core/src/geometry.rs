#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! Coordinates are signed pixels with the origin at the top-left of the
//! container. Right-to-left placement of a row that is wider than its
//! container moves items past the left edge, so `left` may go negative.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An item rectangle stored by its four edges.
///
/// `right` and `bottom` are exclusive, so `width = right - left`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Frame {
    /// Left edge (inclusive).
    pub left: i32,
    /// Top edge (inclusive).
    pub top: i32,
    /// Right edge (exclusive).
    pub right: i32,
    /// Bottom edge (exclusive).
    pub bottom: i32,
}

impl Frame {
    /// Create a frame from its edges.
    #[inline]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a frame from an origin and a size.
    #[inline]
    pub const fn from_origin_size(left: i32, top: i32, size: Size) -> Self {
        Self::new(
            left,
            top,
            left.saturating_add(size.width),
            top.saturating_add(size.height),
        )
    }

    /// Horizontal extent.
    #[inline]
    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    /// Vertical extent.
    #[inline]
    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Extent as a [`Size`].
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Overwrite all four edges in place.
    #[inline]
    pub fn set(&mut self, left: i32, top: i32, right: i32, bottom: i32) {
        *self = Self::new(left, top, right, bottom);
    }

    /// Return the frame moved by `(dx, dy)`.
    #[inline]
    pub const fn translate(&self, dx: i32, dy: i32) -> Self {
        Self::new(
            self.left.saturating_add(dx),
            self.top.saturating_add(dy),
            self.right.saturating_add(dx),
            self.bottom.saturating_add(dy),
        )
    }

    /// Mirror the frame horizontally inside a band `[0, width)`.
    ///
    /// The vertical edges are unchanged.
    #[inline]
    pub const fn mirror_within(&self, width: i32) -> Self {
        Self::new(width - self.right, self.top, width - self.left, self.bottom)
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// Zero size.
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a new size.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Check if either dimension is zero (or negative).
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// Padding insets around a container's content box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Insets {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Insets {
    /// Zero insets.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Create new insets with equal values.
    pub const fn all(val: i32) -> Self {
        Self::new(val, val, val, val)
    }

    /// Create new insets with horizontal values only.
    pub const fn horizontal(val: i32) -> Self {
        Self::new(0, val, 0, val)
    }

    /// Create new insets with vertical values only.
    pub const fn vertical(val: i32) -> Self {
        Self::new(val, 0, val, 0)
    }

    /// Create new insets with specific values (CSS order).
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Copy with every negative side replaced by zero.
    #[must_use]
    pub const fn clamped(self) -> Self {
        Self::new(
            clamp_non_negative(self.top),
            clamp_non_negative(self.right),
            clamp_non_negative(self.bottom),
            clamp_non_negative(self.left),
        )
    }

    /// Sum of left and right.
    #[inline]
    pub const fn horizontal_sum(&self) -> i32 {
        self.left.saturating_add(self.right)
    }

    /// Sum of top and bottom.
    #[inline]
    pub const fn vertical_sum(&self) -> i32 {
        self.top.saturating_add(self.bottom)
    }
}

impl From<i32> for Insets {
    fn from(val: i32) -> Self {
        Self::all(val)
    }
}

impl From<(i32, i32)> for Insets {
    fn from((vertical, horizontal): (i32, i32)) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }
}

impl From<(i32, i32, i32, i32)> for Insets {
    fn from((top, right, bottom, left): (i32, i32, i32, i32)) -> Self {
        Self::new(top, right, bottom, left)
    }
}

/// Replace a negative measurement with zero.
#[inline]
pub const fn clamp_non_negative(value: i32) -> i32 {
    if value < 0 { 0 } else { value }
}

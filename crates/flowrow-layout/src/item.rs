//! Items handed to the engine by the host.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use flowrow_core::geometry::Size;

/// One child of the flow container, already measured by the host.
///
/// An item's identity is its position in the slice passed to the engine.
/// Hidden items take no space and get neither a row nor a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FlowItem {
    /// Measured width.
    pub width: i32,
    /// Measured height.
    pub height: i32,
    pub visible: bool,
}

impl FlowItem {
    /// A visible item with the given measurement.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            visible: true,
        }
    }

    /// A hidden item; its measurement is ignored.
    #[inline]
    pub const fn hidden(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            visible: false,
        }
    }

    /// Largest width or height an item can occupy. Larger measurements are
    /// clamped so a few rows of huge items cannot overflow `i32` offsets.
    pub const MAX_EXTENT: i32 = 1 << 24;

    /// Measurement clamped to `0..=MAX_EXTENT`.
    #[inline]
    pub const fn clamped_size(&self) -> Size {
        Size::new(clamp_extent(self.width), clamp_extent(self.height))
    }
}

const fn clamp_extent(value: i32) -> i32 {
    if value < 0 {
        0
    } else if value > FlowItem::MAX_EXTENT {
        FlowItem::MAX_EXTENT
    } else {
        value
    }
}

impl From<Size> for FlowItem {
    fn from(size: Size) -> Self {
        Self::new(size.width, size.height)
    }
}

impl From<(i32, i32)> for FlowItem {
    fn from((width, height): (i32, i32)) -> Self {
        Self::new(width, height)
    }
}

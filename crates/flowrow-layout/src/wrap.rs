//! Measurement pass: greedy row packing.
//!
//! Items are packed left to right in index order. An item starts a new row
//! when it would cross the wrap width and the current row already holds at
//! least one item, so an item wider than the container still gets a row of
//! its own instead of being split or dropped.
//!
//! Item extents are clamped to [`FlowItem::MAX_EXTENT`]; running offsets
//! beyond that saturate at `i32::MAX` rather than wrapping.
//!
//! Frames produced here are row-local: no padding, no flow gravity, no
//! mirroring. Row gravity is applied as each row closes, once its height is
//! final. The placement pass turns these frames into container coordinates.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use flowrow_core::geometry::{Frame, Size, clamp_non_negative};

use crate::config::{FlowConfig, RowGravity};
use crate::frames::FrameArena;
use crate::item::FlowItem;

/// A horizontal band of items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Row {
    /// Member indices in packing order.
    pub items: Vec<usize>,
    /// Offset of the row inside the content area.
    pub top: i32,
    /// Right edge of the last member.
    pub width: i32,
    /// Tallest member.
    pub height: i32,
}

impl Row {
    fn starting_at(top: i32) -> Self {
        Self {
            items: Vec::new(),
            top,
            width: 0,
            height: 0,
        }
    }

    /// Bottom edge of the row inside the content area.
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.top + self.height
    }
}

/// Output of the measurement pass, consumed by the placement pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FlowLines {
    /// Rows in top-to-bottom order.
    pub rows: Vec<Row>,
    /// Row-local frames keyed by item index.
    pub frames: FrameArena,
    /// Widest row by tallest stack, padding excluded.
    pub content: Size,
}

impl FlowLines {
    /// Empty output.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rows: Vec::new(),
            frames: FrameArena::new(),
            content: Size::ZERO,
        }
    }

    /// Drop the previous pass, keeping allocations, and size the frame arena
    /// for `item_count` items.
    pub fn clear(&mut self, item_count: usize) {
        self.rows.clear();
        self.frames.reset(item_count);
        self.content = Size::ZERO;
    }

    /// Number of items that landed in a row.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.rows.iter().map(|row| row.items.len()).sum()
    }

    /// Row holding the item at `index`.
    #[must_use]
    pub fn row_of(&self, index: usize) -> Option<usize> {
        self.rows.iter().position(|row| row.items.contains(&index))
    }
}

/// Pack `items` into rows no wider than `wrap_width`.
#[must_use]
pub fn wrap(items: &[FlowItem], config: &FlowConfig, wrap_width: i32) -> FlowLines {
    let mut lines = FlowLines::new();
    wrap_into(&mut lines, items, config, wrap_width);
    lines
}

/// Like [`wrap`], but refills an existing [`FlowLines`] in place.
pub fn wrap_into(lines: &mut FlowLines, items: &[FlowItem], config: &FlowConfig, wrap_width: i32) {
    let span = flowrow_core::debug_span!("flow_wrap", items = items.len(), wrap_width);
    let _guard = span.enter();

    lines.clear(items.len());

    let spacing_horizontal = clamp_non_negative(config.spacing_horizontal);
    let spacing_vertical = clamp_non_negative(config.spacing_vertical);
    let mut packer = RowPacker {
        lines: &mut *lines,
        row_gravity: config.row_gravity,
        row: None,
        row_width: 0,
        row_top: 0,
        max_row_height: 0,
    };

    for (index, item) in items.iter().enumerate() {
        if !item.visible {
            continue;
        }
        let size = item.clamped_size();

        // Spacing only follows an item that reached past the row's left edge.
        let mut child_left = if packer.row_width > 0 {
            packer.row_width.saturating_add(spacing_horizontal)
        } else {
            0
        };
        if child_left.saturating_add(size.width) > wrap_width && packer.row.is_some() {
            packer.close_row();
            packer.row_top = packer
                .row_top
                .saturating_add(packer.max_row_height)
                .saturating_add(spacing_vertical);
            packer.row_width = 0;
            packer.max_row_height = 0;
            child_left = 0;
        }

        packer.push(index, Frame::from_origin_size(child_left, packer.row_top, size));
    }
    packer.close_row();

    flowrow_core::debug!(
        rows = lines.rows.len(),
        content_width = lines.content.width,
        content_height = lines.content.height,
        "wrapped flow items"
    );
}

/// Running state of one packing pass.
struct RowPacker<'a> {
    lines: &'a mut FlowLines,
    row_gravity: RowGravity,
    row: Option<Row>,
    row_width: i32,
    row_top: i32,
    max_row_height: i32,
}

impl RowPacker<'_> {
    fn push(&mut self, index: usize, frame: Frame) {
        self.lines.frames.set(index, frame);
        self.row_width = frame.right;
        self.max_row_height = self.max_row_height.max(frame.height());

        let row_top = self.row_top;
        let row = self.row.get_or_insert_with(|| Row::starting_at(row_top));
        row.items.push(index);
        row.width = self.row_width;
        row.height = self.max_row_height;
    }

    /// Finish the row in progress, if any, and fold it into the content size.
    fn close_row(&mut self) {
        let Some(row) = self.row.take() else {
            return;
        };
        align_row(&row, &mut self.lines.frames, self.row_gravity);

        let content = &mut self.lines.content;
        content.width = content.width.max(self.row_width);
        content.height = self.row_top.saturating_add(self.max_row_height);

        flowrow_core::trace!(
            row = self.lines.rows.len(),
            items = row.items.len(),
            top = row.top,
            width = row.width,
            height = row.height,
            "closed flow row"
        );
        self.lines.rows.push(row);
    }
}

/// Align the members of a fully packed row vertically.
///
/// Frames are expected top-aligned at `row.top`. `Center` only ever moves an
/// item down; `Bottom` pins every item's bottom edge to the row's bottom.
pub fn align_row(row: &Row, frames: &mut FrameArena, gravity: RowGravity) {
    if gravity == RowGravity::Top {
        return;
    }
    for &index in &row.items {
        let Some(frame) = frames.get_mut(index) else {
            continue;
        };
        let item_height = frame.height();
        match gravity {
            RowGravity::Top => {}
            RowGravity::Center => {
                let new_top = row.top + (row.height - item_height) / 2;
                if frame.top < new_top {
                    frame.set(frame.left, new_top, frame.right, new_top + item_height);
                }
            }
            RowGravity::Bottom => {
                let bottom = row.bottom();
                if frame.bottom != bottom {
                    frame.set(frame.left, bottom - item_height, frame.right, bottom);
                }
            }
        }
    }
}

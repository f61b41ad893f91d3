//! Layout pass: container coordinates.
//!
//! Takes the row-local frames from the measurement pass and applies, per row,
//! the flow gravity and reading direction, then the container padding.
//!
//! With `slack = content_width - row.width` (content width being the resolved
//! container width minus horizontal padding):
//!
//! | direction | gravity | left edge of an item                       |
//! |-----------|---------|--------------------------------------------|
//! | LTR       | Start   | `padding.left + frame.left`                |
//! | LTR       | Center  | … `+ slack / 2`                            |
//! | LTR       | End     | … `+ slack`                                |
//! | RTL       | End     | `width - padding.right - frame.right`      |
//! | RTL       | Center  | … `- slack / 2`                            |
//! | RTL       | Start   | … `- slack`                                |
//!
//! A row wider than the container has negative slack, so centering or
//! end-aligning it pushes items past the opposite edge.

use flowrow_core::geometry::{Frame, Insets, Size};

use crate::config::{FlowConfig, FlowGravity};
use crate::direction::FlowDirection;
use crate::frames::FrameArena;
use crate::wrap::{FlowLines, Row};

/// Write the final frame of every row member into `out`.
///
/// `measured` is the resolved outer size of the container. The provisional
/// frames in `lines` are left untouched, so placing again with the same
/// inputs yields the same frames.
pub fn place_into(
    out: &mut FrameArena,
    lines: &FlowLines,
    measured: Size,
    padding: Insets,
    config: &FlowConfig,
) {
    let span = flowrow_core::debug_span!(
        "flow_place",
        rows = lines.rows.len(),
        width = measured.width,
        height = measured.height
    );
    let _guard = span.enter();

    out.reset(lines.frames.len());
    let padding = padding.clamped();
    let content_width = measured.width - padding.horizontal_sum();

    for row in &lines.rows {
        let offset = RowOffset::new(row, content_width, config);
        for &index in &row.items {
            let Some(frame) = lines.frames.get(index) else {
                continue;
            };
            out.set(index, offset.place(frame, measured.width, padding));
        }
    }
}

/// Like [`place_into`], returning a fresh arena.
#[must_use]
pub fn place(lines: &FlowLines, measured: Size, padding: Insets, config: &FlowConfig) -> FrameArena {
    let mut out = FrameArena::with_capacity(lines.frames.len());
    place_into(&mut out, lines, measured, padding, config);
    out
}

/// Horizontal treatment shared by all members of one row.
#[derive(Debug, Clone, Copy)]
struct RowOffset {
    direction: FlowDirection,
    shift: i32,
}

impl RowOffset {
    fn new(row: &Row, content_width: i32, config: &FlowConfig) -> Self {
        let slack = content_width - row.width;
        let shift = match (config.direction, config.flow_gravity) {
            (FlowDirection::Ltr, FlowGravity::Start) | (FlowDirection::Rtl, FlowGravity::End) => 0,
            (FlowDirection::Ltr, FlowGravity::Center) => slack / 2,
            (FlowDirection::Ltr, FlowGravity::End) => slack,
            (FlowDirection::Rtl, FlowGravity::Center) => -(slack / 2),
            (FlowDirection::Rtl, FlowGravity::Start) => -slack,
        };
        Self {
            direction: config.direction,
            shift,
        }
    }

    fn place(&self, frame: Frame, width: i32, padding: Insets) -> Frame {
        let anchored = match self.direction {
            FlowDirection::Ltr => frame.translate(padding.left, 0),
            // Mirror inside [0, width - padding.right): the row grows leftward
            // from the right content edge.
            FlowDirection::Rtl => frame.mirror_within(width - padding.right),
        };
        anchored.translate(self.shift, padding.top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::FlowItem;
    use crate::wrap::wrap;

    fn lines_for(config: &FlowConfig, width: i32) -> FlowLines {
        let items = [FlowItem::new(40, 10), FlowItem::new(40, 10), FlowItem::new(40, 10)];
        wrap(&items, config, width)
    }

    fn placed(config: FlowConfig, measured: Size, padding: Insets) -> Vec<(usize, Frame)> {
        let lines = lines_for(&config, measured.width - padding.horizontal_sum());
        place(&lines, measured, padding, &config).iter().collect()
    }

    fn base() -> FlowConfig {
        FlowConfig::default().spacing_horizontal(10).spacing_vertical(5)
    }

    #[test]
    fn ltr_start_is_padding_plus_row_local() {
        let frames = placed(base(), Size::new(100, 25), Insets::ZERO);
        assert_eq!(
            frames,
            vec![
                (0, Frame::new(0, 0, 40, 10)),
                (1, Frame::new(50, 0, 90, 10)),
                (2, Frame::new(0, 15, 40, 25)),
            ]
        );
    }

    #[test]
    fn ltr_padding_offsets_every_frame() {
        let frames = placed(base(), Size::new(120, 45), Insets::new(7, 10, 13, 10));
        assert_eq!(frames[0].1, Frame::new(10, 7, 50, 17));
        assert_eq!(frames[2].1, Frame::new(10, 22, 50, 32));
    }

    #[test]
    fn ltr_center_splits_slack() {
        let config = base().flow_gravity(FlowGravity::Center);
        let frames = placed(config, Size::new(100, 25), Insets::ZERO);
        // Row 0 slack 10, row 1 slack 60.
        assert_eq!(frames[0].1, Frame::new(5, 0, 45, 10));
        assert_eq!(frames[1].1, Frame::new(55, 0, 95, 10));
        assert_eq!(frames[2].1, Frame::new(30, 15, 70, 25));
    }

    #[test]
    fn ltr_end_takes_full_slack() {
        let config = base().flow_gravity(FlowGravity::End);
        let frames = placed(config, Size::new(100, 25), Insets::ZERO);
        assert_eq!(frames[1].1, Frame::new(60, 0, 100, 10));
        assert_eq!(frames[2].1, Frame::new(60, 15, 100, 25));
    }

    #[test]
    fn rtl_default_mirrors_ltr() {
        let config = FlowConfig::for_direction(FlowDirection::Rtl)
            .spacing_horizontal(10)
            .spacing_vertical(5);
        let frames = placed(config, Size::new(100, 25), Insets::ZERO);
        assert_eq!(frames[0].1, Frame::new(60, 0, 100, 10));
        assert_eq!(frames[1].1, Frame::new(10, 0, 50, 10));
        assert_eq!(frames[2].1, Frame::new(60, 15, 100, 25));
    }

    #[test]
    fn rtl_via_builder_uses_right_edge_by_default() {
        let config = FlowConfig::default().direction(FlowDirection::Rtl);
        let lines = wrap(&[FlowItem::new(40, 10)], &config, 100);
        let frames = place(&lines, Size::new(100, 10), Insets::ZERO, &config);
        assert_eq!(frames.get(0), Some(Frame::new(60, 0, 100, 10)));
    }

    #[test]
    fn rtl_start_hugs_left_edge() {
        let config = FlowConfig::for_direction(FlowDirection::Rtl)
            .spacing_horizontal(10)
            .flow_gravity(FlowGravity::Start);
        let frames = placed(config, Size::new(100, 20), Insets::ZERO);
        // First row spans 0..90, reversed.
        assert_eq!(frames[0].1, Frame::new(50, 0, 90, 10));
        assert_eq!(frames[1].1, Frame::new(0, 0, 40, 10));
        assert_eq!(frames[2].1, Frame::new(0, 10, 40, 20));
    }

    #[test]
    fn rtl_center_splits_slack() {
        let config = FlowConfig::for_direction(FlowDirection::Rtl)
            .spacing_horizontal(10)
            .flow_gravity(FlowGravity::Center);
        let frames = placed(config, Size::new(100, 20), Insets::ZERO);
        assert_eq!(frames[0].1, Frame::new(55, 0, 95, 10));
        assert_eq!(frames[2].1, Frame::new(30, 10, 70, 20));
    }

    #[test]
    fn rtl_respects_padding() {
        let config = FlowConfig::for_direction(FlowDirection::Rtl).spacing_horizontal(10);
        let frames = placed(config, Size::new(120, 30), Insets::new(3, 4, 0, 16));
        assert_eq!(frames[0].1, Frame::new(76, 3, 116, 13));
    }

    #[test]
    fn oversized_row_overflows_when_centered() {
        let config = FlowConfig::default().flow_gravity(FlowGravity::Center);
        let lines = wrap(&[FlowItem::new(150, 10)], &config, 100);
        let out = place(&lines, Size::new(100, 10), Insets::ZERO, &config);
        // Slack -50 truncates toward zero.
        assert_eq!(out.get(0), Some(Frame::new(-25, 0, 125, 10)));
    }

    #[test]
    fn oversized_row_rtl_default_goes_negative() {
        let config = FlowConfig::for_direction(FlowDirection::Rtl);
        let lines = wrap(&[FlowItem::new(150, 10)], &config, 100);
        let out = place(&lines, Size::new(100, 10), Insets::ZERO, &config);
        assert_eq!(out.get(0), Some(Frame::new(-50, 0, 100, 10)));
    }

    #[test]
    fn placing_twice_is_idempotent() {
        let config = base().flow_gravity(FlowGravity::Center);
        let lines = lines_for(&config, 100);
        let mut out = FrameArena::new();
        place_into(&mut out, &lines, Size::new(100, 25), Insets::all(2), &config);
        let first = out.clone();
        place_into(&mut out, &lines, Size::new(100, 25), Insets::all(2), &config);
        assert_eq!(out, first);
    }

    #[test]
    fn hidden_items_stay_unplaced() {
        let config = FlowConfig::default();
        let items = [FlowItem::new(10, 10), FlowItem::hidden(10, 10)];
        let lines = wrap(&items, &config, 100);
        let out = place(&lines, Size::new(100, 10), Insets::ZERO, &config);
        assert_eq!(out.len(), 2);
        assert_eq!(out.get(1), None);
    }
}

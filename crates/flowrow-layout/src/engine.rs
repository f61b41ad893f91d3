//! Stateful facade over the two passes.
//!
//! [`FlowEngine`] owns the row and frame storage so hosts that relayout the
//! same container repeatedly reuse it. Every [`FlowEngine::measure`] rebuilds
//! the rows; [`FlowEngine::layout`] places them for the size the last
//! measurement resolved (or a size the host imposes).
//!
//! One engine serves one container. It is not meant to be shared between
//! threads while a pass is running; use one engine per concurrent layout.
//!
//! # Example
//!
//! ```
//! use flowrow_core::geometry::Frame;
//! use flowrow_layout::{Container, FlowConfig, FlowEngine, FlowItem};
//!
//! let config = FlowConfig::default().spacing_horizontal(10).spacing_vertical(5);
//! let mut engine = FlowEngine::new(Some(config));
//! let items = [FlowItem::new(40, 10); 3];
//!
//! let measurement = engine.measure(&items, &Container::natural(100));
//! assert_eq!(measurement.size.width, 90);
//! assert_eq!(measurement.size.height, 25);
//!
//! let frames = engine.layout();
//! assert_eq!(frames.get(2), Some(Frame::new(0, 15, 40, 25)));
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use flowrow_core::geometry::{Frame, Insets, Size, clamp_non_negative};

use crate::config::{FlowConfig, FlowGravity, RowGravity};
use crate::container::{Container, ContainerVisibility};
use crate::direction::FlowDirection;
use crate::frames::FrameArena;
use crate::item::FlowItem;
use crate::place::place_into;
use crate::wrap::{FlowLines, Row, wrap_into};

/// Result of a measurement pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Measurement {
    /// Resolved outer size of the container.
    pub size: Size,
    /// Extent of the rows, padding excluded.
    pub content: Size,
    pub visibility: ContainerVisibility,
}

/// Wrapping flow layout for one container.
#[derive(Debug, Clone)]
pub struct FlowEngine {
    config: FlowConfig,
    lines: FlowLines,
    placed: FrameArena,
    measured: Option<MeasuredBox>,
}

/// What the placement pass needs from the last measurement.
#[derive(Debug, Clone, Copy)]
struct MeasuredBox {
    size: Size,
    padding: Insets,
}

impl Default for FlowEngine {
    fn default() -> Self {
        Self::new(None)
    }
}

impl FlowEngine {
    /// Create an engine. `None` resolves to the process-locale defaults.
    #[must_use]
    pub fn new(config: Option<FlowConfig>) -> Self {
        Self {
            config: FlowConfig::resolve(config),
            lines: FlowLines::new(),
            placed: FrameArena::new(),
            measured: None,
        }
    }

    /// Create an engine from a declarative attribute source.
    ///
    /// Malformed attributes are logged and replaced by the locale defaults;
    /// construction never fails.
    #[must_use]
    pub fn from_attrs_with<F>(get: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let parse = FlowConfig::from_attrs_with(FlowConfig::from_system_locale(), get);
        if !parse.is_clean() {
            flowrow_core::warn!(
                errors = parse.errors.len(),
                "ignoring malformed flow attributes: {:?}",
                parse.errors
            );
        }
        Self::new(Some(parse.config))
    }

    /// Current configuration.
    #[must_use]
    pub const fn config(&self) -> &FlowConfig {
        &self.config
    }

    /// Replace the configuration; takes effect on the next measurement.
    pub fn set_config(&mut self, config: FlowConfig) {
        self.config = config.normalized();
    }

    /// Set the gap between items of a row (negative clamps to 0).
    pub fn set_spacing_horizontal(&mut self, spacing: i32) {
        self.config.spacing_horizontal = clamp_non_negative(spacing);
    }

    /// Set the gap between rows (negative clamps to 0).
    pub fn set_spacing_vertical(&mut self, spacing: i32) {
        self.config.spacing_vertical = clamp_non_negative(spacing);
    }

    pub fn set_flow_gravity(&mut self, gravity: FlowGravity) {
        self.config.flow_gravity = gravity;
    }

    pub fn set_row_gravity(&mut self, gravity: RowGravity) {
        self.config.row_gravity = gravity;
    }

    /// Override the locale direction. A flow gravity still at the old
    /// direction's default follows the new direction.
    pub fn set_direction(&mut self, direction: FlowDirection) {
        self.config.set_direction(direction);
    }

    /// Pack `items` into rows and resolve the container size.
    ///
    /// Invalidates the rows and placed frames of any previous pass.
    pub fn measure(&mut self, items: &[FlowItem], container: &Container) -> Measurement {
        wrap_into(
            &mut self.lines,
            items,
            &self.config,
            container.content_width_limit(),
        );
        self.placed.reset(0);

        let size = container.resolve(self.lines.content);
        let visibility = ContainerVisibility::for_size(size);
        self.measured = Some(MeasuredBox {
            size,
            padding: container.padding.clamped(),
        });

        flowrow_core::debug!(
            width = size.width,
            height = size.height,
            collapsed = visibility == ContainerVisibility::Collapse,
            "measured flow container"
        );
        Measurement {
            size,
            content: self.lines.content,
            visibility,
        }
    }

    /// Place the rows of the last measurement at its resolved size.
    ///
    /// Without a prior measurement there is nothing to place and the returned
    /// arena is empty.
    pub fn layout(&mut self) -> &FrameArena {
        if let Some(measured) = self.measured {
            self.place(measured.size, measured.padding);
        }
        &self.placed
    }

    /// Place the rows of the last measurement inside bounds of `size`, for
    /// hosts that hand the container a different size than it asked for.
    pub fn layout_in(&mut self, size: Size) -> &FrameArena {
        if let Some(measured) = self.measured {
            self.place(size, measured.padding);
        }
        &self.placed
    }

    fn place(&mut self, size: Size, padding: Insets) {
        place_into(&mut self.placed, &self.lines, size, padding, &self.config);
    }

    /// Rows of the last measurement.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.lines.rows
    }

    /// Full output of the last measurement pass.
    #[must_use]
    pub const fn lines(&self) -> &FlowLines {
        &self.lines
    }

    /// Final frame of an item after [`layout`](Self::layout).
    #[must_use]
    pub fn frame(&self, index: usize) -> Option<Frame> {
        self.placed.get(index)
    }

    /// Final frames after [`layout`](Self::layout).
    #[must_use]
    pub const fn frames(&self) -> &FrameArena {
        &self.placed
    }
}

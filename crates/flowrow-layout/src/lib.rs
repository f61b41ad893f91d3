#![forbid(unsafe_code)]

//! Wrapping flow layout.
//!
//! Arranges a sequence of pre-measured rectangular items into rows that wrap
//! at the container's width, the way inline text flows:
//!
//! - [`wrap`] - measurement pass: greedy row packing, row-local frames, row gravity
//! - [`place`] - layout pass: flow gravity, RTL mirroring and padding
//! - [`FlowEngine`] - stateful facade that owns and reuses the row/frame storage
//! - [`FlowConfig`] - spacing, gravities and direction, with attribute/env parsing
//! - [`FlowDirection`] - reading direction resolved from a locale
//!
//! The host measures its children; this crate never calls back into it. Items
//! come in as [`FlowItem`] values and frames go out keyed by item index.
//!
//! # Two passes
//!
//! ```
//! use flowrow_core::geometry::{Frame, Insets, Size};
//! use flowrow_layout::{FlowConfig, FlowItem, place, wrap};
//!
//! let config = FlowConfig::default().spacing_horizontal(10).spacing_vertical(5);
//! let items = [FlowItem::new(40, 10), FlowItem::new(40, 10), FlowItem::new(40, 10)];
//!
//! let lines = wrap(&items, &config, 100);
//! assert_eq!(lines.rows.len(), 2);
//! assert_eq!(lines.content, Size::new(90, 25));
//!
//! let frames = place(&lines, Size::new(100, 25), Insets::ZERO, &config);
//! assert_eq!(frames.get(1), Some(Frame::new(50, 0, 90, 10)));
//! assert_eq!(frames.get(2), Some(Frame::new(0, 15, 40, 25)));
//! ```

pub mod config;
pub mod container;
pub mod direction;
pub mod engine;
pub mod frames;
pub mod item;
pub mod place;
pub mod wrap;

pub use config::{FlowConfig, FlowConfigError, FlowConfigParse, FlowGravity, RowGravity};
pub use container::{Container, ContainerVisibility, SizeMode};
pub use direction::FlowDirection;
pub use engine::{FlowEngine, Measurement};
pub use flowrow_core::geometry::{Frame, Insets, Size};
pub use frames::FrameArena;
pub use item::FlowItem;
pub use place::{place, place_into};
pub use wrap::{FlowLines, Row, align_row, wrap, wrap_into};

#![forbid(unsafe_code)]

//! Core: geometry primitives and logging shims shared by the flow layout crates.

pub mod geometry;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace, warn};

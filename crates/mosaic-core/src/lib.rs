#![forbid(unsafe_code)]

//! Core: virtual-unit geometry, edge flags, and media descriptors.

pub mod flags;
pub mod geometry;
pub mod logging;
pub mod media;

pub use flags::EdgeFlags;
pub use geometry::{
    AVATAR_INSET, CANVAS_HEIGHT, CANVAS_WIDTH, EDGE_SPAN_BONUS, GridSpan, MAX_GRID,
    MIN_CELL_HEIGHT, MIN_CELL_WIDTH, MIN_MIDDLE_WIDTH, MIN_ROW_FRACTION, SIDE_PADDING, SPAN_MAX,
    round_unit,
};
pub use media::{GroupContext, MediaRef, Shape, ShapeProfile};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace, trace_span, warn, warn_span};

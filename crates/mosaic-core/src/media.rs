#![forbid(unsafe_code)]

//! Media descriptors and shape classification.
//!
//! [`MediaRef`] is the caller-facing description of one attachment: raw
//! dimensions plus the two booleans the engine cares about. The engine never
//! looks at message internals; classifying an attachment as document-like is
//! the caller's responsibility.

use serde::{Deserialize, Serialize};

/// Aspect ratio above which an item counts as wide.
pub const WIDE_RATIO: f64 = 1.2;

/// Aspect ratio below which an item counts as narrow.
pub const NARROW_RATIO: f64 = 0.8;

/// Aspect ratio beyond which the closed-form layouts no longer apply.
pub const EXTREME_RATIO: f64 = 2.0;

/// One media attachment, as seen by the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MediaRef {
    /// Source width in pixels. Zero means unknown.
    pub width: u32,
    /// Source height in pixels. Zero means unknown.
    pub height: u32,
    /// Whether the attachment carries caption text.
    pub has_caption: bool,
    /// Whether the attachment renders as a generic file row.
    pub is_document_like: bool,
}

impl MediaRef {
    /// Create a photo-like reference from dimensions.
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            has_caption: false,
            is_document_like: false,
        }
    }

    /// Width/height ratio, defaulting to 1.0 when a dimension is unknown.
    #[inline]
    pub fn aspect_ratio(&self) -> f64 {
        if self.width == 0 || self.height == 0 {
            1.0
        } else {
            f64::from(self.width) / f64::from(self.height)
        }
    }
}

/// Per-group rendering context supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GroupContext {
    /// Whether the album was sent by the local user.
    pub is_outgoing: bool,
    /// Whether the renderer walks masonry rows against the edge order.
    pub reversed_render_order: bool,
    /// Whether an avatar is drawn beside the album's boundary column.
    pub needs_avatar_inset: bool,
}

/// Shape class of a single aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    /// Ratio above [`WIDE_RATIO`].
    Wide,
    /// Ratio below [`NARROW_RATIO`].
    Narrow,
    /// Everything in between.
    Square,
}

impl Shape {
    /// Classify an aspect ratio.
    #[inline]
    pub fn classify(ratio: f64) -> Self {
        if ratio > WIDE_RATIO {
            Shape::Wide
        } else if ratio < NARROW_RATIO {
            Shape::Narrow
        } else {
            Shape::Square
        }
    }
}

/// Shape tendency of a whole group, in item order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ShapeProfile {
    shapes: Vec<Shape>,
    mean_ratio: f64,
}

impl ShapeProfile {
    /// Build a profile from per-item ratios.
    ///
    /// The mean is seeded with 1.0 before summing, i.e. `(1 + Σr) / n`. The
    /// exact-case thresholds were tuned against the seeded mean, so it is
    /// kept rather than corrected.
    pub fn from_ratios(ratios: &[f64]) -> Self {
        let shapes = ratios.iter().map(|&r| Shape::classify(r)).collect();
        let mean_ratio = if ratios.is_empty() {
            1.0
        } else {
            (1.0 + ratios.iter().sum::<f64>()) / ratios.len() as f64
        };
        Self { shapes, mean_ratio }
    }

    /// Shape of the item at `index`, if present.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Shape> {
        self.shapes.get(index).copied()
    }

    /// Number of classified items.
    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the profile is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Seeded mean aspect ratio of the group.
    #[inline]
    pub fn mean_ratio(&self) -> f64 {
        self.mean_ratio
    }

    /// Whether every item matches the given shape.
    pub fn all(&self, shape: Shape) -> bool {
        self.shapes.iter().all(|&s| s == shape)
    }
}

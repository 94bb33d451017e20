#![forbid(unsafe_code)]

//! Grouped-media collage layout.
//!
//! This crate arranges an ordered set of media attachments into a single
//! album grid, Instagram-bubble style: each item gets a grid cell, a
//! normalized size in the 800×814 virtual canvas, and edge-role flags for
//! the renderer. The pipeline:
//!
//! - `aspect` - per-item ratio collection and shape profiling
//! - `exact` - closed-form layouts for groups of up to four items
//! - `search` - row-partition enumeration with a cost function for the rest
//! - `assign` - slot assignment for searched partitions
//! - `finalize` - document stacks, span bonuses, avatar inset, captions
//!
//! The whole computation is a pure function of its inputs; callers may cache
//! a [`LayoutResult`] keyed by the item list and invalidate on membership
//! change.
//!
//! ```
//! use mosaic_core::{GroupContext, MediaRef};
//! use mosaic_layout::layout_group;
//!
//! let items = [MediaRef::new(1280, 720), MediaRef::new(720, 1280)];
//! let result = layout_group(&items, GroupContext::default());
//! assert_eq!(result.cells.len(), 2);
//! ```

mod aspect;
mod assign;
mod exact;
mod finalize;
mod search;

use serde::{Deserialize, Serialize};

pub use aspect::AspectSet;
pub use mosaic_core::{EdgeFlags, GridSpan, GroupContext, MediaRef};

/// One item's solved position within the album grid.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Cell {
    /// Inclusive column/row span in the solved grid.
    pub span: GridSpan,
    /// Width in canvas units.
    pub width: f64,
    /// Height as a fraction of the canvas height.
    pub height: f64,
    /// Masonry-grid sizing weight; starts equal to the width and then
    /// absorbs row remainders and edge bonuses.
    pub span_weight: i32,
    /// Sides of the cell that touch the album boundary.
    pub edge_flags: EdgeFlags,
    /// Whether the cell sits on the side the sender avatar occupies.
    pub is_boundary_edge: bool,
    /// Span consumed by cells to the left when the render order is
    /// reversed from the edge order.
    pub left_span_offset: i32,
    /// On the anchor of an irregular layout: normalized heights of the
    /// adjacent stacked column, for shared-border alignment.
    pub sibling_heights: Option<Vec<f64>>,
}

impl Cell {
    /// Place a cell, seeding the span weight from the width.
    pub(crate) fn place(span: GridSpan, width: i32, height: f64, edge_flags: EdgeFlags) -> Self {
        Self {
            span,
            width: f64::from(width),
            height,
            span_weight: width,
            edge_flags,
            is_boundary_edge: false,
            left_span_offset: 0,
            sibling_heights: None,
        }
    }
}

/// Complete layout for one album, one cell per input item.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutResult {
    /// `cells[i]` is the cell for `items[i]`.
    pub cells: Vec<Cell>,
    /// Whether the group degenerated to a vertical document list.
    pub is_documents_stack: bool,
    /// Whether an irregular (sibling) layout was chosen.
    pub has_sibling_layout: bool,
    /// Index of the single item that should carry the caption, if
    /// unambiguous.
    pub caption_holder: Option<usize>,
    /// Number of grid columns in use (max column index + 1).
    pub grid_columns: u8,
}

/// Intermediate layout produced by a solver, before post-processing.
#[derive(Debug, Clone, Default)]
pub(crate) struct Draft {
    pub cells: Vec<Cell>,
    pub max_x: u8,
    pub has_sibling: bool,
}

/// Arrange a group of media attachments into an album grid.
///
/// Items are identified by their index in `items`; the result holds exactly
/// one cell per item. An empty slice yields the empty result. The call is
/// pure and deterministic: identical inputs produce identical results.
///
/// Callers must supply positive dimensions where known; unknown dimensions
/// (zero width or height) fall back to a square aspect ratio.
pub fn layout_group(items: &[MediaRef], context: GroupContext) -> LayoutResult {
    if items.is_empty() {
        return LayoutResult::default();
    }

    let is_documents = items.iter().all(|m| m.is_document_like);
    let draft = if is_documents {
        finalize::document_stack(items.len())
    } else {
        solve(items, context)
    };

    #[cfg(feature = "tracing")]
    tracing::trace!(
        count = items.len(),
        documents = is_documents,
        sibling = draft.has_sibling,
        "album layout solved"
    );

    finalize::finalize(draft, items, context, is_documents)
}

fn solve(items: &[MediaRef], context: GroupContext) -> Draft {
    let aspects = aspect::collect(items);
    if let Some(draft) = exact::solve_exact(&aspects, context) {
        return draft;
    }

    let cropped = search::clamp_ratios(&aspects.ratios, aspects.profile.mean_ratio());
    match search::best_partition(&cropped, aspects.profile.mean_ratio()) {
        Some(partition) => assign::assign(&partition, &cropped, context),
        // The search enumerates nothing for a lone item (the exact solver
        // already took it) or for a group too large to fit four rows of at
        // most three or four items; the empty layout is the fallback.
        None => Draft::default(),
    }
}

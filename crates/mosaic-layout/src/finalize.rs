#![forbid(unsafe_code)]

//! Post-processing: document stacks, span bonuses, avatar inset, and
//! caption ownership.

use crate::{Cell, Draft, LayoutResult};
use mosaic_core::{
    AVATAR_INSET, CANVAS_WIDTH, EDGE_SPAN_BONUS, EdgeFlags, GridSpan, GroupContext, MediaRef,
    SPAN_MAX,
};

/// Build the degenerate layout for an all-documents group: one full-width
/// row per item, fixed-height rows signalled by the [`SPAN_MAX`] sentinel.
pub(crate) fn document_stack(count: usize) -> Draft {
    let cells = (0..count)
        .map(|row| {
            let mut flags = EdgeFlags::FULL_WIDTH;
            if row == 0 {
                flags |= EdgeFlags::TOP;
            }
            if row == count - 1 {
                flags |= EdgeFlags::BOTTOM;
            }
            let mut cell = Cell::place(GridSpan::cell(0, row as u8), CANVAS_WIDTH, 0.0, flags);
            cell.span_weight = SPAN_MAX;
            cell
        })
        .collect();
    Draft {
        cells,
        max_x: 0,
        has_sibling: false,
    }
}

/// Apply span bonuses, boundary marking, the avatar inset, and caption
/// selection, then freeze the draft into a [`LayoutResult`].
pub(crate) fn finalize(
    draft: Draft,
    items: &[MediaRef],
    context: GroupContext,
    is_documents: bool,
) -> LayoutResult {
    let Draft {
        mut cells,
        max_x,
        has_sibling,
    } = draft;

    for cell in &mut cells {
        if context.is_outgoing {
            // Outgoing bubbles hug the right margin; the leftmost column
            // soaks up the flexible span and the right edge faces the
            // sender side.
            if !is_documents && cell.span.min_x == 0 {
                cell.span_weight += EDGE_SPAN_BONUS;
            }
            if cell.edge_flags.contains(EdgeFlags::RIGHT) {
                cell.is_boundary_edge = true;
            }
        } else {
            if !is_documents
                && (cell.span.max_x == max_x || cell.edge_flags.contains(EdgeFlags::RIGHT))
            {
                cell.span_weight += EDGE_SPAN_BONUS;
            }
            if cell.edge_flags.contains(EdgeFlags::LEFT) {
                cell.is_boundary_edge = true;
            }
        }

        if !context.is_outgoing && context.needs_avatar_inset && !is_documents {
            apply_avatar_inset(cell);
        }
    }

    LayoutResult {
        caption_holder: pick_caption_holder(items, is_documents),
        grid_columns: if cells.is_empty() { 0 } else { max_x + 1 },
        cells,
        is_documents_stack: is_documents,
        has_sibling_layout: has_sibling,
    }
}

/// Shift an incoming cell's masonry accounting to make room for the avatar.
///
/// The sign flip between the boundary and the far edge is inherited from
/// the renderer this engine was extracted from and must not be "fixed";
/// the grid consumer compensates on the other side.
fn apply_avatar_inset(cell: &mut Cell) {
    if cell.is_boundary_edge {
        if cell.span_weight != SPAN_MAX {
            cell.span_weight += AVATAR_INSET;
        }
        cell.width += f64::from(AVATAR_INSET);
    } else if cell.edge_flags.contains(EdgeFlags::RIGHT) {
        if cell.span_weight != SPAN_MAX {
            cell.span_weight -= AVATAR_INSET;
        } else if cell.left_span_offset != 0 {
            cell.left_span_offset += AVATAR_INSET;
        }
    }
}

/// First captioned item wins; a second captioned item makes ownership
/// ambiguous for photo albums, and the renderer suppresses inline captions.
fn pick_caption_holder(items: &[MediaRef], is_documents: bool) -> Option<usize> {
    let mut holder = None;
    for (index, item) in items.iter().enumerate() {
        if !item.has_caption {
            continue;
        }
        if holder.is_none() {
            holder = Some(index);
        } else if !is_documents {
            return None;
        }
    }
    holder
}

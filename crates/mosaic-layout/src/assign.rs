#![forbid(unsafe_code)]

//! Slot assignment for searched partitions.
//!
//! Walks the winning partition row by row and materializes one cell per
//! item. Integer rounding leaves a few units unclaimed in each row; the
//! remainder sinks into the row's boundary item (first for outgoing albums,
//! last for incoming), which keeps the ragged edge on the side hidden by
//! the bubble margin.

use crate::search::Partition;
use crate::{Cell, Draft, GroupContext};
use mosaic_core::{CANVAS_HEIGHT, CANVAS_WIDTH, EdgeFlags, GridSpan, MIN_ROW_FRACTION};

pub(crate) fn assign(partition: &Partition, ratios: &[f64], context: GroupContext) -> Draft {
    let rows = partition.line_counts.len();
    let mut cells = Vec::with_capacity(ratios.len());
    let mut max_x: u8 = 0;
    let mut index = 0;

    for (row, (&count, &line_height)) in partition
        .line_counts
        .iter()
        .zip(partition.heights.iter())
        .enumerate()
    {
        let mut span_left = CANVAS_WIDTH;
        let mut sink = 0;
        max_x = max_x.max(count as u8 - 1);

        for col in 0..count {
            let width = (ratios[index] * line_height) as i32;
            span_left -= width;

            let mut flags = EdgeFlags::empty();
            if row == 0 {
                flags |= EdgeFlags::TOP;
            }
            if row == rows - 1 {
                flags |= EdgeFlags::BOTTOM;
            }
            if col == 0 {
                flags |= EdgeFlags::LEFT;
                if context.is_outgoing {
                    sink = index;
                }
            }
            if col == count - 1 {
                flags |= EdgeFlags::RIGHT;
                if !context.is_outgoing {
                    sink = index;
                }
            }

            let height = (line_height / CANVAS_HEIGHT).max(MIN_ROW_FRACTION);
            cells.push(Cell::place(
                GridSpan::cell(col as u8, row as u8),
                width,
                height,
                flags,
            ));
            index += 1;
        }

        let sink_cell = &mut cells[sink];
        sink_cell.width += f64::from(span_left);
        sink_cell.span_weight += span_left;
    }

    Draft {
        cells,
        max_x,
        has_sibling: false,
    }
}

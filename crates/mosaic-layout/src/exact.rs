#![forbid(unsafe_code)]

//! Closed-form layouts for groups of up to four items.
//!
//! These formulas assume moderate aspect ratios; an extreme item (ratio
//! above 2.0) routes groups of two to four into the general search instead.
//! A single item is always solved here, because the search never enumerates
//! a one-row partition.

use crate::aspect::AspectSet;
use crate::{Cell, Draft};
use mosaic_core::{
    CANVAS_HEIGHT, CANVAS_WIDTH, EdgeFlags, GridSpan, GroupContext, MIN_CELL_HEIGHT,
    MIN_CELL_WIDTH, MIN_MIDDLE_WIDTH, MIN_ROW_FRACTION, SIDE_PADDING, Shape, round_unit,
};

const CANVAS_W: f64 = CANVAS_WIDTH as f64;

/// Attempt a closed-form layout.
///
/// Returns `None` when the group is too large or an extreme ratio demands
/// the general search; the caller falls through to the partition search.
pub(crate) fn solve_exact(aspects: &AspectSet, context: GroupContext) -> Option<Draft> {
    let ratios = &aspects.ratios;
    match ratios.len() {
        1 => Some(solve_single(ratios[0])),
        _ if aspects.force_search => None,
        2 => Some(solve_pair(aspects)),
        3 => Some(solve_triple(aspects, context)),
        4 => Some(solve_quad(aspects, context)),
        _ => None,
    }
}

/// One item: span the whole album, height capped at half the canvas.
fn solve_single(ratio: f64) -> Draft {
    let height = round_unit((CANVAS_W / ratio).min(CANVAS_HEIGHT / 2.0)) / CANVAS_HEIGHT;
    Draft {
        cells: vec![Cell::place(
            GridSpan::cell(0, 0),
            CANVAS_WIDTH,
            height,
            EdgeFlags::ALL_SIDES,
        )],
        max_x: 0,
        has_sibling: false,
    }
}

/// Two items: stacked, equal columns, or unequal columns.
fn solve_pair(aspects: &AspectSet) -> Draft {
    let (r0, r1) = (aspects.ratios[0], aspects.ratios[1]);
    let profile = &aspects.profile;
    let both_wide = profile.all(Shape::Wide);
    let canvas_aspect = CANVAS_W / CANVAS_HEIGHT;

    if both_wide && profile.mean_ratio() > 1.4 * canvas_aspect && r0 - r1 < 0.2 {
        // Two matching landscapes: full-width rows, canvas height split
        // evenly between them.
        let height =
            round_unit((CANVAS_W / r0).min(CANVAS_W / r1).min(CANVAS_HEIGHT / 2.0)) / CANVAS_HEIGHT;
        return Draft {
            cells: vec![
                Cell::place(
                    GridSpan::cell(0, 0),
                    CANVAS_WIDTH,
                    height,
                    EdgeFlags::FULL_WIDTH | EdgeFlags::TOP,
                ),
                Cell::place(
                    GridSpan::cell(0, 1),
                    CANVAS_WIDTH,
                    height,
                    EdgeFlags::FULL_WIDTH | EdgeFlags::BOTTOM,
                ),
            ],
            max_x: 0,
            has_sibling: false,
        };
    }

    if both_wide || profile.all(Shape::Square) {
        let width = CANVAS_WIDTH / 2;
        let w = f64::from(width);
        let height = round_unit((w / r0).min(w / r1).min(CANVAS_HEIGHT)) / CANVAS_HEIGHT;
        return Draft {
            cells: vec![
                Cell::place(
                    GridSpan::cell(0, 0),
                    width,
                    height,
                    EdgeFlags::LEFT | EdgeFlags::TOP | EdgeFlags::BOTTOM,
                ),
                Cell::place(
                    GridSpan::cell(1, 0),
                    width,
                    height,
                    EdgeFlags::RIGHT | EdgeFlags::TOP | EdgeFlags::BOTTOM,
                ),
            ],
            max_x: 1,
            has_sibling: false,
        };
    }

    // Unequal columns: the second column's share is weighted by the first
    // item's height demand, floored at 40% of the canvas.
    let mut second_width =
        (0.4 * CANVAS_W).max(round_unit(CANVAS_W / r0 / (1.0 / r0 + 1.0 / r1))) as i32;
    let mut first_width = CANVAS_WIDTH - second_width;
    if first_width < MIN_CELL_WIDTH {
        let diff = MIN_CELL_WIDTH - first_width;
        first_width = MIN_CELL_WIDTH;
        second_width -= diff;
    }

    let height = CANVAS_HEIGHT
        .min(round_unit(
            (f64::from(first_width) / r0).min(f64::from(second_width) / r1),
        ))
        / CANVAS_HEIGHT;
    Draft {
        cells: vec![
            Cell::place(
                GridSpan::cell(0, 0),
                first_width,
                height,
                EdgeFlags::LEFT | EdgeFlags::TOP | EdgeFlags::BOTTOM,
            ),
            Cell::place(
                GridSpan::cell(1, 0),
                second_width,
                height,
                EdgeFlags::RIGHT | EdgeFlags::TOP | EdgeFlags::BOTTOM,
            ),
        ],
        max_x: 1,
        has_sibling: false,
    }
}

/// Three items: an L-shape when the first is a portrait, otherwise one
/// full-width row above an even pair.
fn solve_triple(aspects: &AspectSet, context: GroupContext) -> Draft {
    let (r0, r1, r2) = (aspects.ratios[0], aspects.ratios[1], aspects.ratios[2]);

    if aspects.profile.get(0) == Some(Shape::Narrow) {
        // Full-height anchor on the left, two stacked cells on the right.
        let third_height = (CANVAS_HEIGHT * 0.5).min(round_unit(r1 * CANVAS_W / (r2 + r1)));
        let second_height = CANVAS_HEIGHT - third_height;
        let right_width = f64::from(MIN_CELL_WIDTH)
            .max((CANVAS_W * 0.5).min(round_unit((third_height * r2).min(second_height * r1))))
            as i32;
        let left_width =
            round_unit((CANVAS_HEIGHT * r0 + f64::from(SIDE_PADDING)).min(CANVAS_W - f64::from(right_width)))
                as i32;

        let mut anchor = Cell::place(
            GridSpan::new(0, 0, 0, 1),
            left_width,
            1.0,
            EdgeFlags::LEFT | EdgeFlags::TOP | EdgeFlags::BOTTOM,
        );
        let mut upper = Cell::place(
            GridSpan::cell(1, 0),
            right_width,
            second_height / CANVAS_HEIGHT,
            EdgeFlags::RIGHT | EdgeFlags::TOP,
        );
        let mut lower = Cell::place(
            GridSpan::cell(1, 1),
            right_width,
            third_height / CANVAS_HEIGHT,
            EdgeFlags::RIGHT | EdgeFlags::BOTTOM,
        );
        lower.span_weight = CANVAS_WIDTH;
        anchor.sibling_heights = Some(vec![
            third_height / CANVAS_HEIGHT,
            second_height / CANVAS_HEIGHT,
        ]);

        if context.is_outgoing {
            anchor.span_weight = CANVAS_WIDTH - right_width;
        } else {
            upper.span_weight = CANVAS_WIDTH - left_width;
        }
        if !context.is_outgoing || context.reversed_render_order {
            lower.left_span_offset = left_width;
        }

        return Draft {
            cells: vec![anchor, upper, lower],
            max_x: 1,
            has_sibling: true,
        };
    }

    let first_height = round_unit((CANVAS_W / r0).min(CANVAS_HEIGHT * 0.66)) / CANVAS_HEIGHT;
    let top = Cell::place(
        GridSpan::new(0, 1, 0, 0),
        CANVAS_WIDTH,
        first_height,
        EdgeFlags::FULL_WIDTH | EdgeFlags::TOP,
    );

    let width = CANVAS_WIDTH / 2;
    let w = f64::from(width);
    let mut second_height =
        (CANVAS_HEIGHT - first_height).min(round_unit((w / r1).min(w / r2))) / CANVAS_HEIGHT;
    if second_height < MIN_ROW_FRACTION {
        second_height = MIN_ROW_FRACTION;
    }
    Draft {
        cells: vec![
            top,
            Cell::place(
                GridSpan::cell(0, 1),
                width,
                second_height,
                EdgeFlags::LEFT | EdgeFlags::BOTTOM,
            ),
            Cell::place(
                GridSpan::cell(1, 1),
                width,
                second_height,
                EdgeFlags::RIGHT | EdgeFlags::BOTTOM,
            ),
        ],
        max_x: 1,
        has_sibling: false,
    }
}

/// Four items: a full-width banner over three columns when the first is a
/// landscape, otherwise an L-shape with three stacked cells.
fn solve_quad(aspects: &AspectSet, context: GroupContext) -> Draft {
    let (r0, r1, r2, r3) = (
        aspects.ratios[0],
        aspects.ratios[1],
        aspects.ratios[2],
        aspects.ratios[3],
    );

    if aspects.profile.get(0) == Some(Shape::Wide) {
        let h0 = round_unit((CANVAS_W / r0).min(CANVAS_HEIGHT * 0.66)) / CANVAS_HEIGHT;
        let banner = Cell::place(
            GridSpan::new(0, 2, 0, 0),
            CANVAS_WIDTH,
            h0,
            EdgeFlags::FULL_WIDTH | EdgeFlags::TOP,
        );

        let mut h = round_unit(CANVAS_W / (r1 + r2 + r3));
        let mut w0 = f64::from(MIN_CELL_WIDTH).max((CANVAS_W * 0.4).min(h * r1)) as i32;
        let mut w2 = f64::from(MIN_CELL_WIDTH).max(CANVAS_W * 0.33).max(h * r3) as i32;
        let mut w1 = CANVAS_WIDTH - w0 - w2;
        if w1 < MIN_MIDDLE_WIDTH {
            let diff = MIN_MIDDLE_WIDTH - w1;
            w1 = MIN_MIDDLE_WIDTH;
            w0 -= diff / 2;
            w2 -= diff - diff / 2;
        }
        h = (CANVAS_HEIGHT - h0).min(h);
        let mut h = h / CANVAS_HEIGHT;
        if h < MIN_ROW_FRACTION {
            h = MIN_ROW_FRACTION;
        }
        return Draft {
            cells: vec![
                banner,
                Cell::place(
                    GridSpan::cell(0, 1),
                    w0,
                    h,
                    EdgeFlags::LEFT | EdgeFlags::BOTTOM,
                ),
                Cell::place(GridSpan::cell(1, 1), w1, h, EdgeFlags::BOTTOM),
                Cell::place(
                    GridSpan::cell(2, 1),
                    w2,
                    h,
                    EdgeFlags::RIGHT | EdgeFlags::BOTTOM,
                ),
            ],
            max_x: 2,
            has_sibling: false,
        };
    }

    // Full-height anchor on the left, three stacked cells on the right; the
    // two upper heights are capped at a third of the canvas each and the
    // bottom cell takes the rest.
    let w = f64::from(MIN_CELL_WIDTH).max(round_unit(
        CANVAS_HEIGHT / (1.0 / r1 + 1.0 / r2 + 1.0 / r3),
    )) as i32;
    let h0 = 0.33_f64.min(MIN_CELL_HEIGHT.max(f64::from(w) / r1) / CANVAS_HEIGHT);
    let h1 = 0.33_f64.min(MIN_CELL_HEIGHT.max(f64::from(w) / r2) / CANVAS_HEIGHT);
    let h2 = 1.0 - h0 - h1;
    let w0 = round_unit((CANVAS_HEIGHT * r0 + f64::from(SIDE_PADDING)).min(CANVAS_W - f64::from(w)))
        as i32;

    let mut anchor = Cell::place(
        GridSpan::new(0, 0, 0, 2),
        w0,
        h0 + h1 + h2,
        EdgeFlags::LEFT | EdgeFlags::TOP | EdgeFlags::BOTTOM,
    );
    let mut top = Cell::place(
        GridSpan::cell(1, 0),
        w,
        h0,
        EdgeFlags::RIGHT | EdgeFlags::TOP,
    );
    let mut middle = Cell::place(GridSpan::cell(1, 1), w, h1, EdgeFlags::RIGHT);
    middle.span_weight = CANVAS_WIDTH;
    let mut bottom = Cell::place(
        GridSpan::cell(1, 2),
        w,
        h2,
        EdgeFlags::RIGHT | EdgeFlags::BOTTOM,
    );
    bottom.span_weight = CANVAS_WIDTH;

    if context.is_outgoing {
        anchor.span_weight = CANVAS_WIDTH - w;
    } else {
        top.span_weight = CANVAS_WIDTH - w0;
    }
    if !context.is_outgoing || context.reversed_render_order {
        middle.left_span_offset = w0;
        bottom.left_span_offset = w0;
    }
    anchor.sibling_heights = Some(vec![h0, h1, h2]);

    Draft {
        cells: vec![anchor, top, middle, bottom],
        max_x: 1,
        has_sibling: true,
    }
}

#[cfg(test)]
mod tests {
    use super::solve_exact;
    use crate::aspect::AspectSet;
    use mosaic_core::{CANVAS_WIDTH, EdgeFlags, GroupContext, MediaRef, ShapeProfile};

    fn aspects(ratios: &[f64]) -> AspectSet {
        AspectSet {
            ratios: ratios.to_vec(),
            profile: ShapeProfile::from_ratios(ratios),
            force_search: ratios.iter().any(|&r| r > 2.0),
        }
    }

    fn collect(dims: &[(u32, u32)]) -> AspectSet {
        let items: Vec<MediaRef> = dims.iter().map(|&(w, h)| MediaRef::new(w, h)).collect();
        crate::aspect::collect(&items)
    }

    #[test]
    fn single_item_always_solved() {
        // Even a 5:1 panorama stays on the exact path.
        let draft = solve_exact(&aspects(&[5.0]), GroupContext::default())
            .expect("single item must solve");
        assert_eq!(draft.cells.len(), 1);
        assert_eq!(draft.cells[0].edge_flags, EdgeFlags::ALL_SIDES);
        assert_eq!(draft.cells[0].width, 800.0);
        // 800 / 5 = 160 units.
        assert!((draft.cells[0].height - 160.0 / 814.0).abs() < 1e-9);
    }

    #[test]
    fn extreme_pair_declines() {
        assert!(solve_exact(&aspects(&[2.5, 1.0]), GroupContext::default()).is_none());
    }

    #[test]
    fn five_items_decline() {
        assert!(solve_exact(&aspects(&[1.0; 5]), GroupContext::default()).is_none());
    }

    #[test]
    fn matching_landscapes_stack() {
        let set = collect(&[(1500, 1000), (1500, 1000)]);
        let draft = solve_exact(&set, GroupContext::default()).expect("pair must solve");
        assert_eq!(draft.max_x, 0);
        assert_eq!(draft.cells[0].span.min_y, 0);
        assert_eq!(draft.cells[1].span.min_y, 1);
        assert_eq!(draft.cells[0].width, 800.0);
        assert_eq!(draft.cells[1].width, 800.0);
        assert_eq!(draft.cells[0].height, draft.cells[1].height);
    }

    #[test]
    fn square_pair_splits_evenly() {
        let set = collect(&[(900, 1000), (1000, 1000)]);
        let draft = solve_exact(&set, GroupContext::default()).expect("pair must solve");
        assert_eq!(draft.max_x, 1);
        assert_eq!(draft.cells[0].width, 400.0);
        assert_eq!(draft.cells[1].width, 400.0);
    }

    #[test]
    fn mixed_pair_gets_unequal_columns() {
        let set = collect(&[(1600, 900), (900, 1600)]);
        let draft = solve_exact(&set, GroupContext::default()).expect("pair must solve");
        assert_eq!(draft.max_x, 1);
        let total = draft.cells[0].width + draft.cells[1].width;
        assert_eq!(total, 800.0);
        assert!(draft.cells[0].width >= 120.0);
        assert!(draft.cells[1].width >= 320.0);
    }

    #[test]
    fn narrow_first_triple_is_l_shape() {
        let set = collect(&[(500, 1000), (1300, 1000), (1300, 1000)]);
        let draft = solve_exact(&set, GroupContext::default()).expect("triple must solve");
        assert!(draft.has_sibling);
        let anchor = &draft.cells[0];
        assert_eq!(anchor.span.min_y, 0);
        assert_eq!(anchor.span.max_y, 1);
        assert_eq!(anchor.height, 1.0);
        let heights = anchor
            .sibling_heights
            .as_ref()
            .expect("anchor records sibling heights");
        assert_eq!(heights.len(), 2);
        // Stacked column fills the canvas height.
        assert!((heights[0] + heights[1] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn l_shape_span_bookkeeping_differs_by_direction() {
        let set = collect(&[(500, 1000), (1300, 1000), (800, 1000)]);
        let incoming = solve_exact(&set, GroupContext::default()).expect("triple must solve");
        let outgoing = solve_exact(
            &set,
            GroupContext {
                is_outgoing: true,
                ..GroupContext::default()
            },
        )
        .expect("triple must solve");

        assert_ne!(incoming.cells[0].span_weight, outgoing.cells[0].span_weight);
        assert_ne!(incoming.cells[2].left_span_offset, 0);
        assert_eq!(outgoing.cells[2].left_span_offset, 0);
    }

    #[test]
    fn plain_triple_is_banner_over_pair() {
        let set = collect(&[(1000, 1000), (1000, 1000), (1000, 1000)]);
        let draft = solve_exact(&set, GroupContext::default()).expect("triple must solve");
        assert!(!draft.has_sibling);
        assert_eq!(draft.cells[0].width, 800.0);
        assert_eq!(draft.cells[1].span.min_y, 1);
        assert_eq!(draft.cells[2].span.min_y, 1);
        assert_eq!(draft.cells[1].height, draft.cells[2].height);
    }

    #[test]
    fn wide_first_quad_is_banner_over_three() {
        let set = collect(&[(1600, 900), (1000, 1000), (1000, 1000), (1000, 1000)]);
        let draft = solve_exact(&set, GroupContext::default()).expect("quad must solve");
        assert!(!draft.has_sibling);
        assert_eq!(draft.max_x, 2);
        let bottom: f64 = draft.cells[1..].iter().map(|c| c.width).sum();
        assert_eq!(bottom, f64::from(CANVAS_WIDTH));
        assert!(draft.cells[2].width >= 58.0);
    }

    #[test]
    fn square_first_quad_is_sibling_stack() {
        let set = collect(&[(1000, 1000), (1000, 1000), (1000, 1000), (1000, 1000)]);
        let draft = solve_exact(&set, GroupContext::default()).expect("quad must solve");
        assert!(draft.has_sibling);
        let heights = draft.cells[0]
            .sibling_heights
            .as_ref()
            .expect("anchor records sibling heights");
        assert_eq!(heights.len(), 3);
        assert!((heights.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        // Upper two stacked cells are each capped at a third of the canvas.
        assert!(heights[0] <= 0.33 + 1e-9);
        assert!(heights[1] <= 0.33 + 1e-9);
    }
}

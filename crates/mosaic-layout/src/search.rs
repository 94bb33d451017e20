#![forbid(unsafe_code)]

//! Row-partition enumeration and scoring.
//!
//! For groups the closed forms decline, every way of splitting the items
//! (in order) into two, three, or four contiguous rows is enumerated and
//! scored against a target total height. The first minimal-cost candidate
//! in enumeration order wins; the enumeration order is part of the
//! contract, since equal-cost ties must resolve the same way on every run.

use mosaic_core::{CANVAS_WIDTH, MIN_CELL_WIDTH};

/// Ratios are clamped into this band before the search so one odd item
/// cannot dominate a row.
const CLAMP_MIN: f64 = 0.66667;
const CLAMP_MAX: f64 = 1.7;

/// Mean ratio above which all items are biased landscape.
const LANDSCAPE_BIAS: f64 = 1.1;

/// Mean ratio below which a middle row may hold four items.
const DENSE_ROW_MEAN: f64 = 0.85;

/// Longest row in a candidate partition.
const MAX_ROW_ITEMS: usize = 3;

/// A candidate split of the group into contiguous rows.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Partition {
    /// Items per row, top to bottom.
    pub line_counts: Vec<usize>,
    /// Row heights in canvas units, top to bottom.
    pub heights: Vec<f64>,
}

/// Clamp ratios into the search band, biased toward landscape or portrait
/// depending on the group's mean ratio.
pub(crate) fn clamp_ratios(ratios: &[f64], mean_ratio: f64) -> Vec<f64> {
    ratios
        .iter()
        .map(|&r| {
            let biased = if mean_ratio > LANDSCAPE_BIAS {
                r.max(1.0)
            } else {
                r.min(1.0)
            };
            biased.clamp(CLAMP_MIN, CLAMP_MAX)
        })
        .collect()
}

/// Height of the row holding `ratios[start..end]` when it spans the canvas.
fn row_height(ratios: &[f64], start: usize, end: usize) -> f64 {
    let sum: f64 = ratios[start..end].iter().sum();
    f64::from(CANVAS_WIDTH) / sum
}

/// Enumerate all candidate partitions in the canonical order.
fn enumerate(ratios: &[f64], mean_ratio: f64) -> Vec<Partition> {
    let n = ratios.len();
    let mut attempts = Vec::new();
    let middle_cap = if mean_ratio < DENSE_ROW_MEAN { 4 } else { 3 };

    for first in 1..n {
        let second = n - first;
        if first > MAX_ROW_ITEMS || second > MAX_ROW_ITEMS {
            continue;
        }
        attempts.push(Partition {
            line_counts: vec![first, second],
            heights: vec![row_height(ratios, 0, first), row_height(ratios, first, n)],
        });
    }

    for first in 1..n.saturating_sub(1) {
        for second in 1..n - first {
            let third = n - first - second;
            if first > MAX_ROW_ITEMS || second > middle_cap || third > MAX_ROW_ITEMS {
                continue;
            }
            attempts.push(Partition {
                line_counts: vec![first, second, third],
                heights: vec![
                    row_height(ratios, 0, first),
                    row_height(ratios, first, first + second),
                    row_height(ratios, first + second, n),
                ],
            });
        }
    }

    for first in 1..n.saturating_sub(2) {
        for second in 1..n - first {
            for third in 1..n - first - second {
                let fourth = n - first - second - third;
                if first > MAX_ROW_ITEMS
                    || second > MAX_ROW_ITEMS
                    || third > MAX_ROW_ITEMS
                    || fourth > MAX_ROW_ITEMS
                {
                    continue;
                }
                attempts.push(Partition {
                    line_counts: vec![first, second, third, fourth],
                    heights: vec![
                        row_height(ratios, 0, first),
                        row_height(ratios, first, first + second),
                        row_height(ratios, first + second, first + second + third),
                        row_height(ratios, first + second + third, n),
                    ],
                });
            }
        }
    }

    attempts
}

/// Deviation-from-target cost of a candidate.
fn cost(partition: &Partition, target_height: f64) -> f64 {
    let total: f64 = partition.heights.iter().sum();
    let min_line = partition
        .heights
        .iter()
        .copied()
        .fold(f64::MAX, f64::min);

    let mut diff = (total - target_height).abs();
    // Rows should not narrow going down; top-heavy candidates lose.
    let top_heavy = partition
        .line_counts
        .windows(2)
        .any(|pair| pair[0] > pair[1]);
    if top_heavy {
        diff *= 1.2;
    }
    if min_line < f64::from(MIN_CELL_WIDTH) {
        diff *= 1.5;
    }
    diff
}

/// Pick the lowest-cost partition of the clamped ratios.
///
/// Returns `None` only for groups of one, which never reach the search.
pub(crate) fn best_partition(ratios: &[f64], mean_ratio: f64) -> Option<Partition> {
    // 800 / 3 * 4 in integer arithmetic, as the renderer computes it.
    let target_height = f64::from(CANVAS_WIDTH / 3 * 4);

    let mut optimal: Option<Partition> = None;
    let mut optimal_cost = 0.0;
    for attempt in enumerate(ratios, mean_ratio) {
        let diff = cost(&attempt, target_height);
        if optimal.is_none() || diff < optimal_cost {
            optimal = Some(attempt);
            optimal_cost = diff;
        }
    }
    optimal
}

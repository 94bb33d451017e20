#![forbid(unsafe_code)]

//! Virtual-unit canvas and grid primitives.
//!
//! All layout math happens in an abstract canvas of [`CANVAS_WIDTH`] ×
//! [`CANVAS_HEIGHT`] units. Widths are absolute canvas units; heights are
//! fractions of the canvas height. Conversion to physical pixels is the
//! renderer's job.

/// Width of the virtual layout canvas, in units.
pub const CANVAS_WIDTH: i32 = 800;

/// Height of the virtual layout canvas, in units.
///
/// Cell heights are stored as fractions of this value.
pub const CANVAS_HEIGHT: f64 = 814.0;

/// Smallest width a cell may be squeezed to, in canvas units.
pub const MIN_CELL_WIDTH: i32 = 120;

/// Horizontal padding reserved beside a full-height anchor column.
pub const SIDE_PADDING: i32 = 40;

/// Smallest height for a stacked sibling cell, in canvas units.
pub const MIN_CELL_HEIGHT: f64 = 120.0;

/// Floor for a row's height, as a fraction of [`CANVAS_HEIGHT`].
pub const MIN_ROW_FRACTION: f64 = 100.0 / CANVAS_HEIGHT;

/// Smallest width for the middle column of a three-column row.
pub const MIN_MIDDLE_WIDTH: i32 = 58;

/// Extra span weight added to the cell that renders beside the avatar.
pub const AVATAR_INSET: i32 = 108;

/// Span-weight bonus for cells on the boundary column of a masonry row.
pub const EDGE_SPAN_BONUS: i32 = 200;

/// Sentinel span weight marking a fixed-height document row.
pub const SPAN_MAX: i32 = 1000;

/// Largest grid dimension a solved layout can use.
pub const MAX_GRID: u8 = 4;

/// Inclusive column/row span of a cell in the solved grid.
///
/// Grids are at most [`MAX_GRID`] × [`MAX_GRID`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub struct GridSpan {
    /// First column covered (inclusive).
    pub min_x: u8,
    /// Last column covered (inclusive).
    pub max_x: u8,
    /// First row covered (inclusive).
    pub min_y: u8,
    /// Last row covered (inclusive).
    pub max_y: u8,
}

impl GridSpan {
    /// Create a new span.
    #[inline]
    pub const fn new(min_x: u8, max_x: u8, min_y: u8, max_y: u8) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Create a 1×1 span at the given cell.
    #[inline]
    pub const fn cell(x: u8, y: u8) -> Self {
        Self::new(x, x, y, y)
    }

    /// Number of columns covered.
    #[inline]
    pub const fn columns(&self) -> u8 {
        self.max_x - self.min_x + 1
    }

    /// Number of rows covered.
    #[inline]
    pub const fn rows(&self) -> u8 {
        self.max_y - self.min_y + 1
    }

    /// Check whether this span shares any grid cell with another.
    #[inline]
    pub const fn overlaps(&self, other: &GridSpan) -> bool {
        self.min_x <= other.max_x
            && other.min_x <= self.max_x
            && self.min_y <= other.max_y
            && other.min_y <= self.max_y
    }

    /// Check whether the span is ordered and fits the maximum grid.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.min_x <= self.max_x
            && self.min_y <= self.max_y
            && self.max_x < MAX_GRID
            && self.max_y < MAX_GRID
    }
}

/// Round half-up to the nearest whole unit.
///
/// Matches the renderer's integer pixel grid; `f64::round` rounds half away
/// from zero, which differs for negative values, but layout math never goes
/// negative so the two agree here.
#[inline]
pub fn round_unit(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::{GridSpan, MAX_GRID, round_unit};

    #[test]
    fn span_cell_is_one_by_one() {
        let span = GridSpan::cell(2, 1);
        assert_eq!(span.columns(), 1);
        assert_eq!(span.rows(), 1);
        assert_eq!(span, GridSpan::new(2, 2, 1, 1));
    }

    #[test]
    fn span_counts_inclusive() {
        let span = GridSpan::new(0, 2, 0, 1);
        assert_eq!(span.columns(), 3);
        assert_eq!(span.rows(), 2);
    }

    #[test]
    fn span_overlap_shared_cell() {
        let a = GridSpan::new(0, 1, 0, 0);
        let b = GridSpan::new(1, 2, 0, 0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn span_overlap_disjoint_rows() {
        let a = GridSpan::new(0, 1, 0, 0);
        let b = GridSpan::new(0, 1, 1, 1);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn span_overlap_self() {
        let span = GridSpan::new(1, 2, 1, 3);
        assert!(span.overlaps(&span));
    }

    #[test]
    fn span_validity_bounds() {
        assert!(GridSpan::new(0, MAX_GRID - 1, 0, MAX_GRID - 1).is_valid());
        assert!(!GridSpan::new(0, MAX_GRID, 0, 0).is_valid());
        assert!(!GridSpan::new(1, 0, 0, 0).is_valid());
    }

    #[test]
    fn round_unit_half_goes_up() {
        assert_eq!(round_unit(2.5), 3.0);
        assert_eq!(round_unit(2.4999), 2.0);
        assert_eq!(round_unit(0.0), 0.0);
    }
}

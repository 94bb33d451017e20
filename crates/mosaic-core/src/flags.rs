#![forbid(unsafe_code)]

//! Edge-role bitset for album cells.

use bitflags::bitflags;

bitflags! {
    /// Sides of a cell that touch the album boundary.
    ///
    /// A single-item album carries all four flags; interior cells of a
    /// larger grid may carry none.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
    pub struct EdgeFlags: u8 {
        /// Cell touches the left edge of the album.
        const LEFT = 1;
        /// Cell touches the right edge of the album.
        const RIGHT = 2;
        /// Cell is in the top row.
        const TOP = 4;
        /// Cell is in the bottom row.
        const BOTTOM = 8;
    }
}

impl EdgeFlags {
    /// Flags for a cell that spans the whole album.
    pub const ALL_SIDES: Self = Self::LEFT
        .union(Self::RIGHT)
        .union(Self::TOP)
        .union(Self::BOTTOM);

    /// Flags for a cell spanning the full album width.
    pub const FULL_WIDTH: Self = Self::LEFT.union(Self::RIGHT);
}

//! Grid coordinates and the 4-neighborhood.
//!
//! `GridCoord` uses `i32` components rather than an unsigned type so that
//! out-of-range input (e.g. a malformed query upstream) stays representable
//! and can be rejected with a typed error instead of wrapping at the API
//! boundary.  The origin is the upper-left corner: x grows right, y grows
//! down.

use std::fmt;

/// A cell position on the grid.
///
/// Plain value type — two cells are the same cell iff their coordinates are
/// equal.  Whether a coordinate is *valid* is a property of a specific grid,
/// checked by `gw-grid`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCoord {
    pub x: i32,
    pub y: i32,
}

impl GridCoord {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell one step in `dir`.  May leave the grid; callers bounds-check.
    #[inline]
    pub fn step(self, dir: Direction) -> GridCoord {
        let (dx, dy) = dir.offset();
        GridCoord { x: self.x + dx, y: self.y + dy }
    }

    /// L1 distance — the minimum number of axis-aligned steps between cells.
    #[inline]
    pub fn manhattan_distance(self, other: GridCoord) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// `true` if the two cells share an edge (L1 distance exactly 1).
    #[inline]
    pub fn is_adjacent(self, other: GridCoord) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for GridCoord {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// The four axis-aligned neighbor directions.  The grid has no diagonals.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All four directions in a fixed scan order.  Iterating neighbors in
    /// this order keeps every grid traversal deterministic.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// `(dx, dy)` with y growing downward (upper-left origin).
    #[inline]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East  => (1, 0),
            Direction::South => (0, 1),
            Direction::West  => (-1, 0),
        }
    }

    /// The direction pointing the opposite way.
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East  => Direction::West,
            Direction::South => Direction::North,
            Direction::West  => Direction::East,
        }
    }
}

//! The [`Coord`] grid address.

use crate::direction::Direction;
use std::fmt;

/// A `(row, col)` address on a 2D grid.
///
/// Coordinates are plain values: equality and hashing are structural on
/// both fields, so a `Coord` can key a `HashMap` or `IndexMap` directly.
/// Fields are signed because neighbour enumeration and bounds checks
/// routinely produce `-1`; a coordinate accepted into a world is always
/// non-negative.
///
/// Ordering is row-major, matching the canonical cell order of a grid.
///
/// # Examples
///
/// ```
/// use gridnav_core::Coord;
///
/// let c = Coord::new(2, 3);
/// let [up, down, left, right] = c.neighbors();
/// assert_eq!(up, Coord::new(1, 3));
/// assert_eq!(down, Coord::new(3, 3));
/// assert_eq!(left, Coord::new(2, 2));
/// assert_eq!(right, Coord::new(2, 4));
/// assert_eq!(c.to_string(), "(2,3)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Row index, growing downwards.
    pub row: i32,
    /// Column index, growing rightwards.
    pub col: i32,
}

impl Coord {
    /// Origin cell `(0, 0)`.
    pub const ORIGIN: Coord = Coord { row: 0, col: 0 };

    /// Create a coordinate.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The four cardinal neighbours in fixed order: up, down, left, right.
    ///
    /// No bounds checking is done here; filtering out-of-bounds or
    /// blocked cells is the world's job. The order is part of the
    /// contract: breadth-first search breaks distance ties by it.
    ///
    /// # Panics
    ///
    /// Overflows like plain `i32` addition when either field sits at
    /// `i32::MIN` or `i32::MAX`. Use [`checked_offset`](Self::checked_offset)
    /// for coordinates that may lie on the edge of the `i32` range.
    pub fn neighbors(self) -> [Coord; 4] {
        Direction::ALL.map(|dir| self.offset(dir))
    }

    /// The coordinate one unit away in `dir`.
    ///
    /// # Panics
    ///
    /// Overflows like plain `i32` addition; see [`neighbors`](Self::neighbors).
    pub fn offset(self, dir: Direction) -> Coord {
        let (dr, dc) = dir.offset();
        Coord::new(self.row + dr, self.col + dc)
    }

    /// The coordinate one unit away in `dir`, or `None` if it is not
    /// representable.
    pub fn checked_offset(self, dir: Direction) -> Option<Coord> {
        let (dr, dc) = dir.offset();
        Some(Coord::new(
            self.row.checked_add(dr)?,
            self.col.checked_add(dc)?,
        ))
    }

    /// Manhattan (L1) distance to `other`, saturating at `u32::MAX`.
    pub fn manhattan(self, other: Coord) -> u32 {
        self.row
            .abs_diff(other.row)
            .saturating_add(self.col.abs_diff(other.col))
    }

    /// Returns `true` if `other` differs by exactly one unit on exactly one axis.
    pub fn is_adjacent(self, other: Coord) -> bool {
        self.manhattan(other) == 1
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coord> for (i32, i32) {
    fn from(c: Coord) -> Self {
        (c.row, c.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

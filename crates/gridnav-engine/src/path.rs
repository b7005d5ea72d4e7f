//! The [`Path`] returned by a successful search.

use gridnav_core::{Coord, Direction};
use std::fmt;

/// A start-to-goal sequence of Manhattan-adjacent coordinates.
///
/// A path is never empty: searching from a cell to itself yields a
/// single-element path. Both endpoints are included.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Path {
    coords: Vec<Coord>,
}

impl Path {
    /// Build a path from raw coordinates.
    ///
    /// Returns `None` if `coords` is empty or any consecutive pair is not
    /// Manhattan-adjacent.
    pub fn new(coords: Vec<Coord>) -> Option<Self> {
        if coords.is_empty() || !coords.windows(2).all(|w| w[0].is_adjacent(w[1])) {
            return None;
        }
        Some(Self { coords })
    }

    /// Wrap coordinates already known to be non-empty and adjacent.
    pub(crate) fn from_search(coords: Vec<Coord>) -> Self {
        debug_assert!(!coords.is_empty());
        debug_assert!(coords.windows(2).all(|w| w[0].is_adjacent(w[1])));
        Self { coords }
    }

    /// Number of coordinates, endpoints included.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Always `false`; paths hold at least their start.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of moves, `len() - 1`.
    pub fn edge_count(&self) -> usize {
        self.coords.len() - 1
    }

    /// First coordinate.
    pub fn start(&self) -> Coord {
        self.coords[0]
    }

    /// Last coordinate.
    pub fn goal(&self) -> Coord {
        self.coords[self.coords.len() - 1]
    }

    /// The coordinates in order.
    pub fn as_slice(&self) -> &[Coord] {
        &self.coords
    }

    /// Iterate over the coordinates in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Coord> {
        self.coords.iter()
    }

    /// Returns `true` if `c` lies on the path.
    pub fn contains(&self, c: Coord) -> bool {
        self.coords.contains(&c)
    }

    /// One direction per edge: replaying these from [`start`](Self::start)
    /// visits every coordinate in order.
    pub fn directions(&self) -> Vec<Direction> {
        let dirs: Vec<Direction> = self
            .coords
            .windows(2)
            .filter_map(|w| Direction::between(w[0], w[1]))
            .collect();
        // Every constructor checks adjacency, so no edge is ever skipped.
        debug_assert_eq!(dirs.len(), self.edge_count());
        dirs
    }

    /// Consume the path, returning its coordinates.
    pub fn into_vec(self) -> Vec<Coord> {
        self.coords
    }
}

impl AsRef<[Coord]> for Path {
    fn as_ref(&self) -> &[Coord] {
        &self.coords
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.coords.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.coords.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

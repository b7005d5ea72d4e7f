//! Cardinal movement directions.

use crate::coord::Coord;
use crate::error::ParseDirectionError;
use std::fmt;
use std::str::FromStr;

/// One of the four cardinal moves on a grid.
///
/// Movement is strictly 4-connected: there are no diagonal variants, and
/// unreachability results rely on that.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// One row up (row - 1).
    Up,
    /// One row down (row + 1).
    Down,
    /// One column left (col - 1).
    Left,
    /// One column right (col + 1).
    Right,
}

impl Direction {
    /// All directions in neighbour-enumeration order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the `(row_offset, col_offset)` for this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The lowercase token accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// The direction that moves `from` onto `to`, if they are adjacent.
    pub fn between(from: Coord, to: Coord) -> Option<Direction> {
        Self::ALL
            .into_iter()
            .find(|&dir| from.checked_offset(dir) == Some(to))
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            other => Err(ParseDirectionError {
                token: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

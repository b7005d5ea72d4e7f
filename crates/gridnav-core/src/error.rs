//! Error types shared across the gridnav workspace.

use std::error::Error;
use std::fmt;

/// Errors from constructing a world with unusable dimensions.
///
/// Worlds are never resized, so these can only surface at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WorldError {
    /// `rows` or `cols` is zero.
    EmptyGrid {
        /// Requested row count.
        rows: u32,
        /// Requested column count.
        cols: u32,
    },
    /// A dimension does not fit the signed coordinate range.
    DimensionTooLarge {
        /// Which dimension (`"rows"` or `"cols"`).
        name: &'static str,
        /// The requested value.
        value: u32,
        /// The largest accepted value.
        max: u32,
    },
}

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { rows, cols } => {
                write!(f, "grid must have at least one cell, got {rows}x{cols}")
            }
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum of {max}")
            }
        }
    }
}

impl Error for WorldError {}

/// A direction token that is not one of `up`, `down`, `left`, `right`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseDirectionError {
    /// The rejected token.
    pub token: String,
}

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown direction '{}'", self.token)
    }
}

impl Error for ParseDirectionError {}

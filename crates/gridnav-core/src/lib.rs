//! Core types for the gridnav grid-world simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the value types shared by every other gridnav crate: the [`Coord`]
//! grid address, the four cardinal [`Direction`]s, and the error types
//! raised when a world is constructed with unusable dimensions.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod direction;
pub mod error;

pub use coord::Coord;
pub use direction::Direction;
pub use error::{ParseDirectionError, WorldError};

//! Grid world storage for gridnav simulations.
//!
//! This crate defines the [`World`]: a fixed-size rectangular grid with a
//! mutable set of wall cells, a start cell and a goal cell. Every agent
//! and search in the workspace answers its spatial questions through it.
//!
//! # Queries
//!
//! - [`World::in_bounds`]: is the coordinate inside the grid?
//! - [`World::passable`]: is the coordinate free of walls? (bounds-agnostic)
//! - [`World::is_goal`]: is the coordinate the goal?

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod world;

#[cfg(test)]
pub(crate) mod compliance;

pub use world::World;

//! Test utilities for gridnav development.
//!
//! Provides world fixtures (see [`fixtures`]) and path assertions shared
//! by unit tests, integration tests and benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{demo_maze, enclosed_goal, open_world, scattered_walls};

use gridnav_core::Coord;
use gridnav_space::World;

/// Assert that `path` runs from `start` to `goal` through open,
/// Manhattan-adjacent cells.
///
/// The first cell is exempt from the open check: searches do not
/// validate their start.
pub fn assert_path_well_formed(world: &World, path: &[Coord], start: Coord, goal: Coord) {
    assert!(!path.is_empty(), "path is empty");
    assert_eq!(path[0], start, "path does not begin at start");
    assert_eq!(path[path.len() - 1], goal, "path does not end at goal");
    for pair in path.windows(2) {
        assert!(
            pair[0].is_adjacent(pair[1]),
            "{} -> {} is not a single cardinal step",
            pair[0],
            pair[1]
        );
    }
    for &cell in &path[1..] {
        assert!(world.in_bounds(cell), "path leaves the grid at {cell}");
        assert!(world.passable(cell), "path crosses wall at {cell}");
    }
}

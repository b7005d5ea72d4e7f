//! gridnav: a grid-world simulation with walls, an agent, and
//! breadth-first shortest paths.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all gridnav sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use gridnav::prelude::*;
//!
//! let mut world = World::new(5, 5).unwrap();
//! world.place_wall(Coord::new(1, 1));
//! world.place_wall(Coord::new(1, 2));
//!
//! let mut finder = PathFinder::new(&world);
//! let path = finder.find_path(Coord::new(0, 2), Coord::new(2, 2)).unwrap();
//! assert_eq!(path.start(), Coord::new(0, 2));
//!
//! let mut agent = Agent::new(&world);
//! assert_eq!(agent.follow(&path), path.edge_count());
//! assert_eq!(agent.at(), Coord::new(2, 2));
//!
//! print!("{}", render_ascii(&world, Some(path.as_slice()), Some(agent.at())));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gridnav-core` | `Coord`, `Direction`, error types |
//! | [`space`] | `gridnav-space` | The `World` grid |
//! | [`engine`] | `gridnav-engine` | `Agent`, `PathFinder`, `Path`, `WorldConfig` |
//! | [`render`] | `gridnav-render` | ASCII rendering |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinates, directions, and errors (`gridnav-core`).
pub use gridnav_core as types;

/// The grid world (`gridnav-space`).
///
/// [`space::World`] answers bounds, wall and goal queries and owns the
/// mutable wall set.
pub use gridnav_space as space;

/// Agents and search (`gridnav-engine`).
///
/// [`engine::Agent`] steps through a world; [`engine::PathFinder`]
/// returns shortest [`engine::Path`]s; [`engine::WorldConfig`] builds
/// worlds from fields or ASCII layouts.
pub use gridnav_engine as engine;

/// ASCII rendering (`gridnav-render`).
pub use gridnav_render as render;

/// Common imports for typical gridnav usage.
///
/// ```rust
/// use gridnav::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use gridnav_core::{Coord, Direction};

    // Errors
    pub use gridnav_core::{ParseDirectionError, WorldError};
    pub use gridnav_engine::ConfigError;

    // World
    pub use gridnav_space::World;

    // Engine
    pub use gridnav_engine::{Agent, Path, PathFinder, SearchMetrics, WorldConfig};

    // Render
    pub use gridnav_render::{render_ascii, AsciiView};
}

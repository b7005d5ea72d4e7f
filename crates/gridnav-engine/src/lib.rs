//! Agents and path search over gridnav worlds.
//!
//! Provides the two consumers of a [`World`](gridnav_space::World):
//! the [`Agent`], a cursor that moves one cardinal step at a time, and
//! the [`PathFinder`], a breadth-first search returning shortest
//! [`Path`]s. Both borrow the world rather than owning it. Worlds are
//! usually assembled from a [`WorldConfig`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod agent;
pub mod config;
pub mod metrics;
pub mod path;
pub mod pathfinder;

pub use agent::Agent;
pub use config::{ConfigError, WorldConfig};
pub use metrics::SearchMetrics;
pub use path::Path;
pub use pathfinder::PathFinder;

//! ASCII rendering for gridnav worlds.
//!
//! Rendering is a pure read of a [`World`](gridnav_space::World) plus two
//! optional overlays: a path and an agent position. Nothing here mutates
//! simulation state.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod ascii;

pub use ascii::{render_ascii, AsciiView, Glyph};

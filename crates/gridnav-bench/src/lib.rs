//! Benchmark profiles for gridnav path search.
//!
//! - [`reference_profile`]: 100x100 grid (10K cells) with 25% seeded walls
//! - [`stress_profile`]: 316x316 grid (~100K cells), same density
//! - [`serpentine_profile`]: walls forcing a single winding corridor

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gridnav_core::Coord;
use gridnav_engine::WorldConfig;
use gridnav_space::World;
use gridnav_test_utils::{open_world, scattered_walls};

/// Wall density used by the scattered profiles.
pub const WALL_DENSITY: f64 = 0.25;

/// 100x100 grid with seeded scattered walls.
pub fn reference_profile(seed: u64) -> World {
    scattered_walls(open_world(100, 100), WALL_DENSITY, seed)
}

/// 316x316 grid with seeded scattered walls.
pub fn stress_profile(seed: u64) -> World {
    scattered_walls(open_world(316, 316), WALL_DENSITY, seed)
}

/// A `size x size` grid where every other row is a wall with one gap,
/// alternating ends, so the only route from start to goal snakes
/// through every open row.
pub fn serpentine_profile(size: u32) -> World {
    let mut config = WorldConfig::new(size, size);
    let last = size as i32 - 1;
    for r in (1..last).step_by(2) {
        let gap = if (r / 2) % 2 == 0 { last } else { 0 };
        config
            .walls
            .extend((0..=last).filter(|&c| c != gap).map(|c| Coord::new(r, c)));
    }
    config.build().expect("serpentine profile size must be non-zero")
}

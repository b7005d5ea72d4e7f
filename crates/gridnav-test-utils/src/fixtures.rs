//! Reusable world fixtures.
//!
//! - [`open_world`]: wall-free grid with default endpoints.
//! - [`enclosed_goal`]: goal boxed in by its four orthogonal neighbours.
//! - [`demo_maze`]: the 5x7 maze driven by the demo example.
//! - [`scattered_walls`]: seeded random walls that spare start and goal.

use gridnav_core::Coord;
use gridnav_space::World;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// A wall-free `rows x cols` world.
///
/// # Panics
///
/// Panics if either dimension is zero.
pub fn open_world(rows: u32, cols: u32) -> World {
    World::new(rows, cols).expect("fixture dimensions must be non-zero")
}

/// An open world whose goal is `goal`, walled in on all four sides.
///
/// Movement is 4-connected, so the goal is unreachable from every cell
/// outside the enclosure. Walls that fall outside the grid are still
/// placed; they are harmless.
pub fn enclosed_goal(rows: u32, cols: u32, goal: Coord) -> World {
    open_world(rows, cols)
        .with_goal(goal)
        .with_walls(goal.neighbors())
}

/// The 5x7 maze from the demo, start `(0,0)`, goal `(4,6)`.
///
/// ```text
/// S......
/// .###...
/// ...#.#.
/// .#.#...
/// ......G
/// ```
pub fn demo_maze() -> World {
    open_world(5, 7)
        .with_start(Coord::new(0, 0))
        .with_goal(Coord::new(4, 6))
        .with_walls([
            Coord::new(1, 1),
            Coord::new(1, 2),
            Coord::new(1, 3),
            Coord::new(2, 3),
            Coord::new(3, 3),
            Coord::new(3, 1),
            Coord::new(2, 5),
        ])
}

/// Place a wall on each in-bounds cell with probability `density`,
/// never on the world's start or goal.
///
/// The same `seed` always yields the same walls.
pub fn scattered_walls(world: World, density: f64, seed: u64) -> World {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let density = density.clamp(0.0, 1.0);
    let (start, goal) = (world.start(), world.goal());
    let walls: Vec<Coord> = world
        .canonical_ordering()
        .into_iter()
        .filter(|&c| rng.random_bool(density) && c != start && c != goal)
        .collect();
    world.with_walls(walls)
}

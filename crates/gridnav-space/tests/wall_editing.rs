//! Integration test: wall editing through the public `World` API.
//!
//! Builds worlds the way callers outside the crate do and checks that
//! wall edits are visible to every later query.

use gridnav_core::{Coord, WorldError};
use gridnav_space::World;

#[test]
fn edits_are_visible_to_later_queries() {
    let mut world = World::new(4, 6).unwrap();
    let cell = Coord::new(2, 3);

    assert!(world.in_bounds(cell) && world.passable(cell));
    world.place_wall(cell);
    assert!(world.in_bounds(cell) && !world.passable(cell));
    world.remove_wall(cell);
    assert!(world.passable(cell));
}

#[test]
fn builder_walls_collapse_duplicates() {
    let world = World::new(3, 3).unwrap().with_walls([
        Coord::new(1, 1),
        Coord::new(1, 1),
        Coord::new(0, 2),
    ]);
    assert_eq!(world.wall_count(), 2);
    assert_eq!(
        world.walls().collect::<Vec<_>>(),
        vec![Coord::new(1, 1), Coord::new(0, 2)]
    );
}

#[test]
fn start_and_goal_can_be_reassigned() {
    let mut world = World::new(5, 7).unwrap();
    world.set_start(Coord::new(0, 0));
    world.set_goal(Coord::new(4, 6));
    assert_eq!(world.start(), Coord::new(0, 0));
    assert!(world.is_goal(Coord::new(4, 6)));
    assert!(!world.is_goal(Coord::new(4, 5)));
}

#[test]
fn wall_count_bounded_only_by_cells() {
    let mut world = World::new(3, 3).unwrap();
    for coord in world.canonical_ordering() {
        world.place_wall(coord);
    }
    assert_eq!(world.wall_count(), world.cell_count());
    assert!(world
        .canonical_ordering()
        .into_iter()
        .all(|c| !world.passable(c)));
}

#[test]
fn empty_dimensions_fail_fast() {
    for (rows, cols) in [(0, 0), (0, 1), (1, 0)] {
        assert_eq!(
            World::new(rows, cols).unwrap_err(),
            WorldError::EmptyGrid { rows, cols }
        );
    }
}

//! World invariant test helpers.
//!
//! These functions verify that a [`World`] satisfies the invariants its
//! consumers rely on. Reused by every test module that builds worlds.

use crate::world::World;
use indexmap::IndexSet;

/// Assert that `canonical_ordering` returns exactly `cell_count` unique,
/// in-bounds coords.
pub fn assert_canonical_ordering_complete(world: &World) {
    let ordering = world.canonical_ordering();
    assert_eq!(
        ordering.len(),
        world.cell_count(),
        "canonical_ordering length ({}) != cell_count ({})",
        ordering.len(),
        world.cell_count()
    );
    let unique: IndexSet<_> = ordering.iter().collect();
    assert_eq!(
        unique.len(),
        world.cell_count(),
        "canonical_ordering has duplicates"
    );
    for coord in &ordering {
        assert!(world.in_bounds(*coord), "{coord} listed but out of bounds");
    }
}

/// Assert that two calls to `canonical_ordering` return the same result.
pub fn assert_canonical_ordering_deterministic(world: &World) {
    let a = world.canonical_ordering();
    let b = world.canonical_ordering();
    assert_eq!(a, b, "canonical_ordering is non-deterministic");
}

/// Assert that `canonical_rank` inverts `canonical_ordering`.
pub fn assert_canonical_rank_consistent(world: &World) {
    for (i, coord) in world.canonical_ordering().into_iter().enumerate() {
        assert_eq!(
            world.canonical_rank(coord),
            Some(i),
            "canonical_rank({coord}) disagrees with ordering position {i}"
        );
    }
}

/// Assert that every open neighbour is in bounds, passable, and adjacent.
pub fn assert_open_neighbors_valid(world: &World) {
    for coord in world.canonical_ordering() {
        for nb in world.open_neighbors(coord) {
            assert!(world.in_bounds(nb), "neighbour {nb} of {coord} out of bounds");
            assert!(world.passable(nb), "neighbour {nb} of {coord} is a wall");
            assert!(coord.is_adjacent(nb), "neighbour {nb} of {coord} not adjacent");
        }
    }
}

/// Assert that `b in open_neighbors(a)` implies `a in open_neighbors(b)`
/// whenever `a` itself is open.
pub fn assert_open_neighbors_symmetric(world: &World) {
    for coord in world.canonical_ordering() {
        if !world.passable(coord) {
            continue;
        }
        for nb in world.open_neighbors(coord) {
            assert!(
                world.open_neighbors(nb).any(|back| back == coord),
                "neighbour symmetry violated: {nb} in N({coord}) but {coord} not in N({nb})"
            );
        }
    }
}

/// Run all compliance checks on a world.
pub fn run_full_compliance(world: &World) {
    assert_canonical_ordering_complete(world);
    assert_canonical_ordering_deterministic(world);
    assert_canonical_rank_consistent(world);
    assert_open_neighbors_valid(world);
    assert_open_neighbors_symmetric(world);
}

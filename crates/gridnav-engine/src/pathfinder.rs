//! Breadth-first shortest-path search.

use crate::metrics::SearchMetrics;
use crate::path::Path;
use gridnav_core::Coord;
use gridnav_space::World;
use indexmap::map::Entry;
use indexmap::IndexMap;
use std::collections::VecDeque;
use std::time::Instant;
use tracing::debug;

/// Breadth-first search over the open cells of a [`World`].
///
/// Paths are shortest by edge count. Neighbours are expanded in the fixed
/// up/down/left/right order, so equal-length alternatives are always
/// resolved the same way: identical world state and arguments give an
/// identical path and identical [`SearchMetrics`] counters.
///
/// The finder borrows its world. Wall edits need `&mut World`, which the
/// borrow checker only grants once every finder over that world is gone,
/// so a search can never observe a half-applied edit.
///
/// # Examples
///
/// ```
/// use gridnav_core::Coord;
/// use gridnav_engine::PathFinder;
/// use gridnav_space::World;
///
/// let world = World::new(5, 5).unwrap();
/// let mut finder = PathFinder::new(&world);
/// let path = finder.find_path(Coord::new(0, 0), Coord::new(2, 2)).unwrap();
/// assert_eq!(path.len(), 5);
/// assert!(finder.nodes_expanded() <= 25);
/// ```
#[derive(Debug)]
pub struct PathFinder<'w> {
    world: &'w World,
    metrics: SearchMetrics,
}

impl<'w> PathFinder<'w> {
    /// Create a finder over `world`.
    pub fn new(world: &'w World) -> Self {
        Self {
            world,
            metrics: SearchMetrics::default(),
        }
    }

    /// The world being searched.
    pub fn world(&self) -> &'w World {
        self.world
    }

    /// Coordinates popped from the frontier during the most recent search.
    pub fn nodes_expanded(&self) -> usize {
        self.metrics.nodes_expanded
    }

    /// Full metrics of the most recent search.
    pub fn last_metrics(&self) -> &SearchMetrics {
        &self.metrics
    }

    /// Search from the world's own start to its own goal.
    pub fn find_world_path(&mut self) -> Option<Path> {
        self.find_path(self.world.start(), self.world.goal())
    }

    /// Shortest path from `start` to `goal`, or `None` if unreachable.
    ///
    /// Neither endpoint is validated. An out-of-bounds or walled `start`
    /// is still expanded; only its neighbours go through the bounds and
    /// wall filters. Callers that care must check `start` themselves.
    ///
    /// At most `rows * cols` cells are expanded, plus one when `start`
    /// itself lies outside the grid.
    pub fn find_path(&mut self, start: Coord, goal: Coord) -> Option<Path> {
        let started = Instant::now();
        self.metrics = SearchMetrics::default();

        let mut frontier = VecDeque::from([start]);
        // Doubles as the visited set: a key is present iff discovered.
        let mut parents: IndexMap<Coord, Option<Coord>> = IndexMap::new();
        parents.insert(start, None);

        let mut peak_frontier = frontier.len();
        let mut found = None;

        while let Some(current) = frontier.pop_front() {
            self.metrics.nodes_expanded += 1;

            if current == goal {
                found = Some(reconstruct(&parents, goal));
                break;
            }

            for nb in self.world.open_neighbors(current) {
                // Mark on discovery, not on pop, so no cell is queued twice.
                if let Entry::Vacant(slot) = parents.entry(nb) {
                    slot.insert(Some(current));
                    frontier.push_back(nb);
                }
            }
            peak_frontier = peak_frontier.max(frontier.len());
        }

        self.metrics.nodes_discovered = parents.len();
        self.metrics.peak_frontier = peak_frontier;
        self.metrics.path_len = found.as_ref().map(Path::len);
        self.metrics.elapsed_us = started.elapsed().as_micros() as u64;

        match &found {
            Some(path) => debug!(
                %start,
                %goal,
                nodes_expanded = self.metrics.nodes_expanded,
                path_len = path.len(),
                "path found"
            ),
            None => debug!(
                %start,
                %goal,
                nodes_expanded = self.metrics.nodes_expanded,
                "goal unreachable"
            ),
        }

        found
    }
}

/// Walk the parent chain back from `goal` and reverse it.
fn reconstruct(parents: &IndexMap<Coord, Option<Coord>>, goal: Coord) -> Path {
    let mut coords = vec![goal];
    let mut node = goal;
    while let Some(&Some(prev)) = parents.get(&node) {
        coords.push(prev);
        node = prev;
    }
    coords.reverse();
    Path::from_search(coords)
}

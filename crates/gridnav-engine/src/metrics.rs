//! Per-search cost metrics.
//!
//! [`SearchMetrics`] captures the work done by the most recent
//! [`PathFinder::find_path`](crate::PathFinder::find_path) call.

/// Counters and timing collected during a single search.
///
/// Every field is overwritten at the start of each search, so the values
/// always describe the most recent call only. All counters are a pure
/// function of the world and the query; `elapsed_us` is wall-clock and
/// therefore the only field that varies between identical searches.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchMetrics {
    /// Coordinates popped from the frontier, including the goal if reached.
    ///
    /// Bounded by the world's cell count, or one more than that when the
    /// search started outside the grid.
    pub nodes_expanded: usize,
    /// Coordinates ever marked visited, start included.
    pub nodes_discovered: usize,
    /// Largest frontier length observed.
    pub peak_frontier: usize,
    /// Length of the returned path, or `None` if the goal was unreachable.
    pub path_len: Option<usize>,
    /// Wall-clock time for the search, in microseconds.
    pub elapsed_us: u64,
}

impl SearchMetrics {
    /// Returns `true` if the search reached its goal.
    pub fn found(&self) -> bool {
        self.path_len.is_some()
    }
}

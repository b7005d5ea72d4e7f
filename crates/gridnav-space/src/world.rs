//! Fixed-size grid with walls, a start cell and a goal cell.

use gridnav_core::{Coord, Direction, WorldError};
use indexmap::IndexSet;

/// A rectangular grid world.
///
/// Each cell has coordinate `(row, col)` where `0 <= row < rows` and
/// `0 <= col < cols`. Walls block movement but do not change bounds: a
/// wall may even be placed outside the grid, where it is simply never
/// consulted by a bounds-checked query.
///
/// `start` and `goal` are not validated. A world whose start sits on a
/// wall is legal; the mistake surfaces later as declined moves or an
/// unreachable goal.
///
/// # Examples
///
/// ```
/// use gridnav_core::Coord;
/// use gridnav_space::World;
///
/// let mut world = World::new(5, 5).unwrap();
/// assert_eq!(world.goal(), Coord::new(4, 4));
///
/// world.place_wall(Coord::new(2, 2));
/// assert!(!world.passable(Coord::new(2, 2)));
/// assert!(world.in_bounds(Coord::new(2, 2)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct World {
    rows: u32,
    cols: u32,
    walls: IndexSet<Coord>,
    start: Coord,
    goal: Coord,
}

impl World {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create an empty `rows x cols` world with start `(0, 0)` and goal
    /// `(rows - 1, cols - 1)`.
    ///
    /// Returns `Err(WorldError::EmptyGrid)` if either dimension is 0, or
    /// `Err(WorldError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn new(rows: u32, cols: u32) -> Result<Self, WorldError> {
        if rows == 0 || cols == 0 {
            return Err(WorldError::EmptyGrid { rows, cols });
        }
        if rows > Self::MAX_DIM {
            return Err(WorldError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(WorldError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self {
            rows,
            cols,
            walls: IndexSet::new(),
            start: Coord::ORIGIN,
            goal: Coord::new(rows as i32 - 1, cols as i32 - 1),
        })
    }

    /// Add every coordinate in `walls`. Duplicates collapse.
    pub fn with_walls(mut self, walls: impl IntoIterator<Item = Coord>) -> Self {
        self.walls.extend(walls);
        self
    }

    /// Replace the start cell.
    pub fn with_start(mut self, start: Coord) -> Self {
        self.start = start;
        self
    }

    /// Replace the goal cell.
    pub fn with_goal(mut self, goal: Coord) -> Self {
        self.goal = goal;
        self
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells, `rows * cols`.
    pub fn cell_count(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// Start cell.
    pub fn start(&self) -> Coord {
        self.start
    }

    /// Goal cell.
    pub fn goal(&self) -> Coord {
        self.goal
    }

    /// Move the start cell. Not validated.
    pub fn set_start(&mut self, start: Coord) {
        self.start = start;
    }

    /// Move the goal cell. Not validated.
    pub fn set_goal(&mut self, goal: Coord) {
        self.goal = goal;
    }

    /// Returns `true` iff `0 <= c.row < rows` and `0 <= c.col < cols`.
    pub fn in_bounds(&self, c: Coord) -> bool {
        c.row >= 0 && c.col >= 0 && (c.row as u32) < self.rows && (c.col as u32) < self.cols
    }

    /// Returns `true` iff `c` is not a wall.
    ///
    /// This says nothing about bounds: an out-of-bounds coordinate with no
    /// wall on it is passable. Movement and search check both.
    pub fn passable(&self, c: Coord) -> bool {
        !self.walls.contains(&c)
    }

    /// Returns `true` iff `c` is a wall.
    pub fn is_wall(&self, c: Coord) -> bool {
        self.walls.contains(&c)
    }

    /// Returns `true` iff `c` is the goal.
    pub fn is_goal(&self, c: Coord) -> bool {
        c == self.goal
    }

    /// Block `c`. Placing an existing wall is a no-op.
    pub fn place_wall(&mut self, c: Coord) {
        self.walls.insert(c);
    }

    /// Unblock `c`. Removing a missing wall is a no-op.
    pub fn remove_wall(&mut self, c: Coord) {
        // shift_remove keeps the remaining walls in insertion order.
        self.walls.shift_remove(&c);
    }

    /// Walls in insertion order.
    pub fn walls(&self) -> impl ExactSizeIterator<Item = Coord> + '_ {
        self.walls.iter().copied()
    }

    /// Number of distinct walls.
    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    /// Remove every wall.
    pub fn clear_walls(&mut self) {
        self.walls.clear();
    }

    /// All in-bounds cells in row-major order:
    /// `(0,0), (0,1), ..., (rows-1, cols-1)`.
    pub fn canonical_ordering(&self) -> Vec<Coord> {
        let mut out = Vec::with_capacity(self.cell_count());
        for r in 0..self.rows as i32 {
            for c in 0..self.cols as i32 {
                out.push(Coord::new(r, c));
            }
        }
        out
    }

    /// Position of `c` in [`canonical_ordering`](Self::canonical_ordering),
    /// or `None` if `c` is out of bounds.
    pub fn canonical_rank(&self, c: Coord) -> Option<usize> {
        if !self.in_bounds(c) {
            return None;
        }
        Some(c.row as usize * self.cols as usize + c.col as usize)
    }

    /// The in-bounds, passable neighbours of `c`, in neighbour order.
    pub fn open_neighbors(&self, c: Coord) -> impl Iterator<Item = Coord> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| c.checked_offset(dir))
            .filter(move |&nb| self.in_bounds(nb) && self.passable(nb))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;

    fn c(r: i32, col: i32) -> Coord {
        Coord::new(r, col)
    }

    // ── Constructor tests ───────────────────────────────────────

    #[test]
    fn new_defaults() {
        let w = World::new(5, 5).unwrap();
        assert_eq!(w.rows(), 5);
        assert_eq!(w.cols(), 5);
        assert_eq!(w.start(), c(0, 0));
        assert_eq!(w.goal(), c(4, 4));
        assert_eq!(w.wall_count(), 0);
    }

    #[test]
    fn goal_default_uses_both_dims() {
        let w = World::new(3, 7).unwrap();
        assert_eq!(w.goal(), c(2, 6));
    }

    #[test]
    fn new_zero_rows_returns_error() {
        assert_eq!(
            World::new(0, 5),
            Err(WorldError::EmptyGrid { rows: 0, cols: 5 })
        );
    }

    #[test]
    fn new_zero_cols_returns_error() {
        assert!(matches!(
            World::new(5, 0),
            Err(WorldError::EmptyGrid { .. })
        ));
    }

    #[test]
    fn new_rejects_dims_exceeding_i32_max() {
        let big = i32::MAX as u32 + 1;
        assert!(matches!(
            World::new(big, 5),
            Err(WorldError::DimensionTooLarge { name: "rows", .. })
        ));
        assert!(matches!(
            World::new(5, big),
            Err(WorldError::DimensionTooLarge { name: "cols", .. })
        ));
    }

    #[test]
    fn start_and_goal_not_validated() {
        let w = World::new(3, 3)
            .unwrap()
            .with_start(c(-4, 9))
            .with_goal(c(10, 10))
            .with_walls([c(-4, 9)]);
        assert_eq!(w.start(), c(-4, 9));
        assert!(!w.in_bounds(w.goal()));
        assert!(!w.passable(w.start()));
    }

    // ── Query tests ─────────────────────────────────────────────

    #[test]
    fn in_bounds_valid() {
        let w = World::new(5, 5).unwrap();
        assert!(w.in_bounds(c(0, 0)));
        assert!(w.in_bounds(c(4, 4)));
        assert!(w.in_bounds(c(2, 3)));
    }

    #[test]
    fn in_bounds_invalid() {
        let w = World::new(5, 5).unwrap();
        assert!(!w.in_bounds(c(-1, 0)));
        assert!(!w.in_bounds(c(0, -1)));
        assert!(!w.in_bounds(c(5, 0)));
        assert!(!w.in_bounds(c(0, 5)));
    }

    #[test]
    fn passable_ignores_bounds() {
        let w = World::new(5, 5).unwrap();
        assert!(w.passable(c(-1, -1)));
        assert!(w.passable(c(99, 0)));
    }

    #[test]
    fn is_goal_uses_structural_equality() {
        let w = World::new(5, 5).unwrap();
        assert!(w.is_goal(c(4, 4)));
        assert!(!w.is_goal(c(0, 0)));
    }

    // ── Wall tests ──────────────────────────────────────────────

    #[test]
    fn place_and_remove_wall() {
        let mut w = World::new(5, 5).unwrap();
        w.place_wall(c(3, 3));
        assert!(w.is_wall(c(3, 3)));
        assert!(!w.passable(c(3, 3)));
        assert!(w.passable(c(2, 3)));

        w.remove_wall(c(3, 3));
        assert!(!w.is_wall(c(3, 3)));
        assert!(w.passable(c(3, 3)));
    }

    #[test]
    fn place_wall_is_idempotent() {
        let mut once = World::new(5, 5).unwrap();
        once.place_wall(c(1, 1));
        let mut twice = World::new(5, 5).unwrap();
        twice.place_wall(c(1, 1));
        twice.place_wall(c(1, 1));
        assert_eq!(once, twice);
        assert_eq!(twice.wall_count(), 1);
    }

    #[test]
    fn remove_missing_wall_is_noop() {
        let mut w = World::new(5, 5).unwrap().with_walls([c(0, 1)]);
        let before = w.clone();
        w.remove_wall(c(2, 2));
        assert_eq!(w, before);
    }

    #[test]
    fn remove_wall_keeps_insertion_order() {
        let mut w = World::new(5, 5)
            .unwrap()
            .with_walls([c(0, 1), c(0, 2), c(0, 3)]);
        w.remove_wall(c(0, 1));
        assert_eq!(w.walls().collect::<Vec<_>>(), vec![c(0, 2), c(0, 3)]);
    }

    #[test]
    fn clear_walls_empties_set() {
        let mut w = World::new(4, 4).unwrap().with_walls([c(1, 1), c(2, 2)]);
        w.clear_walls();
        assert_eq!(w.wall_count(), 0);
    }

    #[test]
    fn walls_do_not_change_bounds() {
        let w = World::new(5, 5).unwrap().with_walls([c(2, 2), c(7, 7)]);
        assert!(w.in_bounds(c(2, 2)));
        assert!(!w.in_bounds(c(7, 7)));
        assert_eq!(w.wall_count(), 2);
    }

    // ── Neighbour tests ─────────────────────────────────────────

    #[test]
    fn open_neighbors_corner() {
        let w = World::new(5, 5).unwrap();
        let n: Vec<_> = w.open_neighbors(c(0, 0)).collect();
        assert_eq!(n, vec![c(1, 0), c(0, 1)]);
    }

    #[test]
    fn open_neighbors_skip_walls() {
        let w = World::new(5, 5).unwrap().with_walls([c(1, 2), c(2, 3)]);
        let n: Vec<_> = w.open_neighbors(c(2, 2)).collect();
        assert_eq!(n, vec![c(3, 2), c(2, 1)]);
    }

    #[test]
    fn single_cell_has_no_neighbors() {
        let w = World::new(1, 1).unwrap();
        assert_eq!(w.open_neighbors(c(0, 0)).count(), 0);
        assert_eq!(w.goal(), c(0, 0));
    }

    #[test]
    fn open_neighbors_at_i32_extremes() {
        let w = World::new(5, 5).unwrap();
        assert_eq!(w.open_neighbors(c(i32::MIN, i32::MIN)).count(), 0);
        assert_eq!(w.open_neighbors(c(i32::MAX, i32::MAX)).count(), 0);
        let n: Vec<_> = w.open_neighbors(c(0, i32::MAX)).collect();
        assert!(n.is_empty());
    }

    // ── Canonical ordering ──────────────────────────────────────

    #[test]
    fn canonical_rank_row_major() {
        let w = World::new(3, 4).unwrap();
        assert_eq!(w.canonical_rank(c(2, 1)), Some(9));
        assert_eq!(w.canonical_rank(c(0, 0)), Some(0));
        assert_eq!(w.canonical_rank(c(3, 0)), None);
        assert_eq!(w.canonical_rank(c(0, -1)), None);
    }

    // ── Compliance suites ───────────────────────────────────────

    #[test]
    fn compliance_open() {
        let w = World::new(6, 9).unwrap();
        compliance::run_full_compliance(&w);
    }

    #[test]
    fn compliance_walled() {
        let w = World::new(7, 7)
            .unwrap()
            .with_walls([c(1, 1), c(1, 2), c(3, 3), c(6, 0), c(20, 20)]);
        compliance::run_full_compliance(&w);
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn in_bounds_matches_ranges(
            rows in 1u32..20,
            cols in 1u32..20,
            r in -5i32..25,
            col in -5i32..25,
        ) {
            let w = World::new(rows, cols).unwrap();
            let expected = r >= 0 && r < rows as i32 && col >= 0 && col < cols as i32;
            prop_assert_eq!(w.in_bounds(c(r, col)), expected);
        }

        #[test]
        fn place_remove_roundtrip(
            walls in proptest::collection::vec((0i32..8, 0i32..8), 0..20),
            r in 0i32..8,
            col in 0i32..8,
        ) {
            let mut w = World::new(8, 8).unwrap();
            for (wr, wc) in walls {
                w.place_wall(c(wr, wc));
            }
            w.place_wall(c(r, col));
            prop_assert!(!w.passable(c(r, col)));
            w.remove_wall(c(r, col));
            prop_assert!(w.passable(c(r, col)));
            w.remove_wall(c(r, col));
            prop_assert!(w.passable(c(r, col)));
        }
    }
}

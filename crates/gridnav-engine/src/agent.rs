//! A cursor that walks a world one cardinal step at a time.

use crate::path::Path;
use gridnav_core::{Coord, Direction};
use gridnav_space::World;
use tracing::trace;

/// An agent bound to one [`World`].
///
/// The agent only ever reads its world. `step` moves it onto in-bounds,
/// passable cells and declines everything else, so a sequence of steps
/// starting from a valid cell never leaves the open part of the grid.
/// [`reset`](Agent::reset) is the one way to put it somewhere else.
#[derive(Clone, Debug)]
pub struct Agent<'w> {
    world: &'w World,
    at: Coord,
}

impl<'w> Agent<'w> {
    /// Create an agent at the world's start cell.
    pub fn new(world: &'w World) -> Self {
        Self::with_position(world, world.start())
    }

    /// Create an agent at `at`. Not validated.
    pub fn with_position(world: &'w World, at: Coord) -> Self {
        Self { world, at }
    }

    /// The world the agent moves through.
    pub fn world(&self) -> &'w World {
        self.world
    }

    /// Current position.
    pub fn at(&self) -> Coord {
        self.at
    }

    /// Returns `true` if `c` is in bounds and not a wall.
    pub fn can_move_to(&self, c: Coord) -> bool {
        self.world.in_bounds(c) && self.world.passable(c)
    }

    /// Move one cell in `direction`.
    ///
    /// Returns `false` and leaves the position unchanged if the target is
    /// out of bounds or a wall. A target past the `i32` range is out of
    /// bounds too, so stepping off a far-away reset position never panics.
    pub fn step(&mut self, direction: Direction) -> bool {
        let target = self.at.checked_offset(direction);
        match target.filter(|&t| self.can_move_to(t)) {
            Some(t) => {
                self.at = t;
                true
            }
            None => {
                trace!(at = %self.at, %direction, ?target, "move declined");
                false
            }
        }
    }

    /// Move one cell in the direction named by `token`
    /// (`"up"`, `"down"`, `"left"` or `"right"`).
    ///
    /// An unrecognised token is a declined move: it returns `false` and
    /// leaves the position unchanged.
    pub fn step_token(&mut self, token: &str) -> bool {
        match token.parse::<Direction>() {
            Ok(direction) => self.step(direction),
            Err(e) => {
                trace!(at = %self.at, error = %e, "move declined");
                false
            }
        }
    }

    /// Teleport to `c`, bypassing bounds and wall checks.
    pub fn reset(&mut self, c: Coord) {
        self.at = c;
    }

    /// Reset to the start of `path` and step along it.
    ///
    /// Stops at the first declined step, which happens when the path runs
    /// through cells this agent's world has walled off. Returns the number
    /// of steps taken; `path.edge_count()` means the goal was reached.
    pub fn follow(&mut self, path: &Path) -> usize {
        self.reset(path.start());
        let mut taken = 0;
        for direction in path.directions() {
            if !self.step(direction) {
                break;
            }
            taken += 1;
        }
        taken
    }
}

//! Character-grid view of a world.

use gridnav_core::Coord;
use gridnav_space::World;
use indexmap::IndexSet;
use std::fmt;

/// What a single rendered cell shows.
///
/// When several apply, the earliest variant wins:
/// agent > start > goal > path > wall > empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// The agent overlay (`A`).
    Agent,
    /// The world's start cell (`S`).
    Start,
    /// The world's goal cell (`G`).
    Goal,
    /// A cell on the path overlay (`*`).
    Path,
    /// A wall (`#`).
    Wall,
    /// Open floor (`.`).
    Empty,
}

impl Glyph {
    /// The character drawn for this glyph.
    pub fn as_char(self) -> char {
        match self {
            Glyph::Agent => 'A',
            Glyph::Start => 'S',
            Glyph::Goal => 'G',
            Glyph::Path => '*',
            Glyph::Wall => '#',
            Glyph::Empty => '.',
        }
    }
}

/// A borrowed view of a world with optional overlays, printable via
/// [`Display`](fmt::Display).
///
/// # Examples
///
/// ```
/// use gridnav_core::Coord;
/// use gridnav_render::AsciiView;
/// use gridnav_space::World;
///
/// let world = World::new(2, 3).unwrap().with_walls([Coord::new(0, 1)]);
/// let view = AsciiView::new(&world).with_agent(Coord::new(1, 0));
/// assert_eq!(view.to_string(), "S#.\nA.G\n");
/// ```
#[derive(Clone, Debug)]
pub struct AsciiView<'a> {
    world: &'a World,
    path: IndexSet<Coord>,
    agent: Option<Coord>,
}

impl<'a> AsciiView<'a> {
    /// A view of `world` with no overlays.
    pub fn new(world: &'a World) -> Self {
        Self {
            world,
            path: IndexSet::new(),
            agent: None,
        }
    }

    /// Overlay `path` cells with `*`.
    pub fn with_path(mut self, path: &[Coord]) -> Self {
        self.path = path.iter().copied().collect();
        self
    }

    /// Overlay the agent at `at`.
    pub fn with_agent(mut self, at: Coord) -> Self {
        self.agent = Some(at);
        self
    }

    /// The glyph drawn at `c`.
    pub fn glyph_at(&self, c: Coord) -> Glyph {
        if self.agent == Some(c) {
            Glyph::Agent
        } else if c == self.world.start() {
            Glyph::Start
        } else if self.world.is_goal(c) {
            Glyph::Goal
        } else if self.path.contains(&c) {
            Glyph::Path
        } else if self.world.is_wall(c) {
            Glyph::Wall
        } else {
            Glyph::Empty
        }
    }
}

impl fmt::Display for AsciiView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.world.rows() as i32 {
            for c in 0..self.world.cols() as i32 {
                fmt::Write::write_char(f, self.glyph_at(Coord::new(r, c)).as_char())?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

/// Render `world` with optional path and agent overlays, one
/// newline-terminated line per row.
pub fn render_ascii(world: &World, path: Option<&[Coord]>, agent: Option<Coord>) -> String {
    let mut view = AsciiView::new(world);
    if let Some(path) = path {
        view = view.with_path(path);
    }
    if let Some(at) = agent {
        view = view.with_agent(at);
    }
    view.to_string()
}

//! World configuration, validation, and layout parsing.
//!
//! [`WorldConfig`] is the builder input for constructing a [`World`].
//! [`validate()`](WorldConfig::validate) checks dimensions up front;
//! [`build()`](WorldConfig::build) produces the world and logs a warning
//! for endpoints that can never be occupied. Configs can also be read
//! from an ASCII layout drawn with the render legend.

use std::error::Error;
use std::fmt;

use gridnav_core::{Coord, WorldError};
use gridnav_space::World;
use tracing::warn;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating or parsing a [`WorldConfig`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The dimensions cannot form a world.
    World(WorldError),
    /// The layout contains no rows.
    EmptyLayout,
    /// A layout row differs in width from the first row.
    RaggedLayout {
        /// Zero-based row index of the offending line.
        line: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// A layout cell holds a character outside the legend.
    UnknownGlyph {
        /// The unrecognised character.
        glyph: char,
        /// Row of the character.
        row: usize,
        /// Column of the character.
        col: usize,
    },
    /// `S` or `G` appears more than once.
    DuplicateMarker {
        /// The repeated marker.
        glyph: char,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::World(e) => write!(f, "world: {e}"),
            Self::EmptyLayout => write!(f, "layout has no rows"),
            Self::RaggedLayout {
                line,
                expected,
                found,
            } => write!(
                f,
                "layout row {line} has width {found}, expected {expected}"
            ),
            Self::UnknownGlyph { glyph, row, col } => {
                write!(f, "unknown glyph '{glyph}' at ({row},{col})")
            }
            Self::DuplicateMarker { glyph } => {
                write!(f, "marker '{glyph}' appears more than once")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::World(e) => Some(e),
            _ => None,
        }
    }
}

impl From<WorldError> for ConfigError {
    fn from(e: WorldError) -> Self {
        Self::World(e)
    }
}

// ── WorldConfig ────────────────────────────────────────────────────

/// Complete configuration for constructing a [`World`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorldConfig {
    /// Number of rows. Must be at least 1.
    pub rows: u32,
    /// Number of columns. Must be at least 1.
    pub cols: u32,
    /// Wall cells. Duplicates collapse.
    pub walls: Vec<Coord>,
    /// Start cell. `None` = `(0, 0)`.
    pub start: Option<Coord>,
    /// Goal cell. `None` = `(rows - 1, cols - 1)`.
    pub goal: Option<Coord>,
}

impl WorldConfig {
    /// A wall-free `rows x cols` config with default endpoints.
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            rows,
            cols,
            walls: Vec::new(),
            start: None,
            goal: None,
        }
    }

    /// Check structural invariants without building the world.
    pub fn validate(&self) -> Result<(), ConfigError> {
        World::new(self.rows, self.cols)?;
        Ok(())
    }

    /// Build the world.
    ///
    /// Endpoints are not rejected when out of bounds or walled, matching
    /// [`World`]'s own contract, but each such endpoint is logged.
    pub fn build(&self) -> Result<World, ConfigError> {
        let mut world = World::new(self.rows, self.cols)?.with_walls(self.walls.iter().copied());
        if let Some(start) = self.start {
            world.set_start(start);
        }
        if let Some(goal) = self.goal {
            world.set_goal(goal);
        }

        for (name, cell) in [("start", world.start()), ("goal", world.goal())] {
            if !world.in_bounds(cell) {
                warn!(endpoint = name, %cell, "endpoint is out of bounds");
            } else if !world.passable(cell) {
                warn!(endpoint = name, %cell, "endpoint is a wall");
            }
        }
        Ok(world)
    }

    /// Parse an ASCII layout.
    ///
    /// Legend: `#` wall, `.` floor, `S` start, `G` goal. `*` and `A` are
    /// overlay glyphs from rendered output and read as floor. Blank lines
    /// before the first and after the last row are ignored, as is
    /// trailing whitespace on each row. Missing `S`/`G` leave the
    /// corresponding endpoint at its default.
    pub fn from_layout(layout: &str) -> Result<Self, ConfigError> {
        let lines: Vec<&str> = layout.lines().map(str::trim_end).collect();
        let first = lines.iter().position(|l| !l.is_empty());
        let last = lines.iter().rposition(|l| !l.is_empty());
        let rows = match (first, last) {
            (Some(first), Some(last)) => &lines[first..=last],
            _ => return Err(ConfigError::EmptyLayout),
        };

        let width = rows[0].chars().count();
        let mut config = WorldConfig::new(dim(rows.len()), dim(width));

        for (r, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(ConfigError::RaggedLayout {
                    line: r,
                    expected: width,
                    found,
                });
            }
            for (col, glyph) in line.chars().enumerate() {
                let cell = Coord::new(r as i32, col as i32);
                match glyph {
                    '.' | '*' | 'A' => {}
                    '#' => config.walls.push(cell),
                    'S' => place_marker(&mut config.start, cell, glyph)?,
                    'G' => place_marker(&mut config.goal, cell, glyph)?,
                    _ => {
                        return Err(ConfigError::UnknownGlyph {
                            glyph,
                            row: r,
                            col,
                        })
                    }
                }
            }
        }

        config.validate()?;
        Ok(config)
    }
}

/// Layout sizes beyond `u32` are clamped so validation reports them.
fn dim(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

fn place_marker(slot: &mut Option<Coord>, cell: Coord, glyph: char) -> Result<(), ConfigError> {
    if slot.replace(cell).is_some() {
        return Err(ConfigError::DuplicateMarker { glyph });
    }
    Ok(())
}

#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Maze Escape workspace.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative session, and pure systems. Adapters submit [`Command`] values
//! describing desired mutations, the session executes those commands via its
//! `apply` entry point, and then broadcasts [`Event`] values for systems to
//! react to deterministically. Systems consume event streams, query immutable
//! snapshots, and respond exclusively with new command batches.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "Welcome to Maze Escape.";

/// Commands that express all permissible session mutations.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Replaces the active maze and difficulty profile, restarting the session.
    InstallMaze {
        /// Freshly generated maze to install.
        grid: MazeGrid,
        /// Difficulty profile the maze was generated for.
        profile: DifficultyProfile,
    },
    /// Requests that the player advance a single step in the given direction.
    Move {
        /// Direction of travel for the attempted step.
        direction: Direction,
    },
    /// Advances the session clock by the provided delta time.
    Tick {
        /// Duration of simulated time that elapsed since the previous tick.
        dt: Duration,
    },
}

/// Events broadcast by the session after processing commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Announces that a maze was installed and the session restarted.
    MazeInstalled {
        /// Number of cell columns in the installed maze.
        columns: u32,
        /// Number of cell rows in the installed maze.
        rows: u32,
    },
    /// Indicates that the session clock advanced.
    TimeAdvanced {
        /// Duration of simulated time that elapsed in the tick.
        dt: Duration,
    },
    /// Confirms that a move was accepted and its animation started.
    MoveStarted {
        /// Cell the player occupies while the animation is in flight.
        from: CellCoord,
        /// Cell the player will occupy once the animation arrives.
        to: CellCoord,
    },
    /// Reports that a move request was rejected without any state change.
    MoveRejected {
        /// Direction provided in the rejected request.
        direction: Direction,
        /// Specific reason the move was refused.
        reason: MoveRejection,
    },
    /// Confirms that an in-flight move arrived and the player cell committed.
    PlayerArrived {
        /// Cell the player occupied before the move.
        from: CellCoord,
        /// Cell the player occupies after the move.
        to: CellCoord,
    },
    /// Announces that the player reached the goal cell.
    GoalReached {
        /// Goal cell the player arrived at.
        cell: CellCoord,
    },
}

/// Reasons a move request may be rejected by the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveRejection {
    /// A previous move's animation has not arrived yet.
    AnimationInFlight,
    /// The target coordinate lies outside the maze bounds.
    OutOfBounds,
    /// The target cell is a wall.
    Blocked,
}

/// Cardinal movement directions available to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Movement toward decreasing row indices.
    North,
    /// Movement toward increasing column indices.
    East,
    /// Movement toward increasing row indices.
    South,
    /// Movement toward decreasing column indices.
    West,
}

impl Direction {
    /// All four cardinal directions in a fixed canonical order.
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Applies the direction to a cell, returning the neighboring coordinate
    /// when it stays within the provided grid bounds.
    #[must_use]
    pub fn apply(self, cell: CellCoord, columns: u32, rows: u32) -> Option<CellCoord> {
        match self {
            Self::North if cell.row() > 0 => Some(CellCoord::new(cell.column(), cell.row() - 1)),
            Self::East if cell.column() + 1 < columns => {
                Some(CellCoord::new(cell.column() + 1, cell.row()))
            }
            Self::South if cell.row() + 1 < rows => {
                Some(CellCoord::new(cell.column(), cell.row() + 1))
            }
            Self::West if cell.column() > 0 => Some(CellCoord::new(cell.column() - 1, cell.row())),
            _ => None,
        }
    }

    /// Derives the direction connecting two cells exactly one cardinal step
    /// apart, or `None` for identical, diagonal, or distant pairs.
    #[must_use]
    pub fn between(from: CellCoord, to: CellCoord) -> Option<Self> {
        let column_diff = from.column().abs_diff(to.column());
        let row_diff = from.row().abs_diff(to.row());
        if column_diff + row_diff != 1 {
            return None;
        }

        if column_diff == 1 {
            if to.column() > from.column() {
                Some(Self::East)
            } else {
                Some(Self::West)
            }
        } else if to.row() > from.row() {
            Some(Self::South)
        } else {
            Some(Self::North)
        }
    }
}

/// Location of a single maze cell expressed as column and row coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Creates a new maze cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Computes the Manhattan distance between two cell coordinates.
    #[must_use]
    pub fn manhattan_distance(self, other: CellCoord) -> u32 {
        self.column().abs_diff(other.column()) + self.row().abs_diff(other.row())
    }
}

/// Binary passability state of a single maze cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// Impassable cell.
    Wall,
    /// Passable cell.
    Open,
}

/// Immutable logical maze grid with designated start and goal cells.
///
/// The grid is constructed once per session by the generator and never mutated
/// by gameplay; a restart replaces it wholesale. Connectivity from start to
/// goal is a hard invariant the generator guarantees before the grid is
/// installed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeGrid {
    columns: u32,
    rows: u32,
    cells: Vec<CellState>,
}

impl MazeGrid {
    /// Creates a grid in which every cell is open.
    #[must_use]
    pub fn open(columns: u32, rows: u32) -> Self {
        let count = usize::try_from(u64::from(columns) * u64::from(rows)).unwrap_or(0);
        Self {
            columns,
            rows,
            cells: vec![CellState::Open; count],
        }
    }

    /// Builds a grid from a dense row-major cell buffer.
    ///
    /// Returns `None` when the buffer length does not match the dimensions.
    #[must_use]
    pub fn from_cells(columns: u32, rows: u32, cells: Vec<CellState>) -> Option<Self> {
        let count = usize::try_from(u64::from(columns) * u64::from(rows)).ok()?;
        if cells.len() != count {
            return None;
        }

        Some(Self {
            columns,
            rows,
            cells,
        })
    }

    /// Number of columns contained in the grid.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows contained in the grid.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Returns the state of the provided cell, or `None` outside the bounds.
    #[must_use]
    pub fn state(&self, cell: CellCoord) -> Option<CellState> {
        self.index(cell)
            .and_then(|index| self.cells.get(index))
            .copied()
    }

    /// Reports whether the cell is in bounds and passable.
    #[must_use]
    pub fn is_open(&self, cell: CellCoord) -> bool {
        matches!(self.state(cell), Some(CellState::Open))
    }

    /// Designated start cell, fixed at the upper-left corner.
    #[must_use]
    pub const fn start(&self) -> CellCoord {
        CellCoord::new(0, 0)
    }

    /// Designated goal cell, fixed at the lower-right corner.
    #[must_use]
    pub const fn goal(&self) -> CellCoord {
        CellCoord::new(self.columns.saturating_sub(1), self.rows.saturating_sub(1))
    }

    fn index(&self, cell: CellCoord) -> Option<usize> {
        if cell.column() < self.columns && cell.row() < self.rows {
            let row = usize::try_from(cell.row()).ok()?;
            let column = usize::try_from(cell.column()).ok()?;
            let width = usize::try_from(self.columns).ok()?;
            Some(row * width + column)
        } else {
            None
        }
    }
}

/// Named difficulty selections available to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Small maze with slow, easily tracked movement.
    Easy,
    /// Mid-sized maze with the standard movement cadence.
    Medium,
    /// Large maze with fast movement and the hover preview disabled.
    Hard,
    /// Fallback selection matching the medium configuration.
    Default,
}

impl Difficulty {
    /// Resolves the selection to its concrete configuration values.
    #[must_use]
    pub const fn profile(self) -> DifficultyProfile {
        match self {
            Self::Easy => DifficultyProfile {
                columns: 20,
                rows: 12,
                cell_size: 30.0,
                step_duration: Duration::from_millis(150),
                hover_enabled: true,
            },
            Self::Hard => DifficultyProfile {
                columns: 40,
                rows: 25,
                cell_size: 15.0,
                step_duration: Duration::from_millis(70),
                hover_enabled: false,
            },
            Self::Medium | Self::Default => DifficultyProfile {
                columns: 30,
                rows: 20,
                cell_size: 20.0,
                step_duration: Duration::from_millis(100),
                hover_enabled: true,
            },
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Default
    }
}

/// Concrete configuration resolved from a [`Difficulty`] selection.
///
/// Resolved once per maze installation; the session never re-reads the
/// difficulty selector while a maze is active.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DifficultyProfile {
    /// Number of cell columns in the generated maze.
    pub columns: u32,
    /// Number of cell rows in the generated maze.
    pub rows: u32,
    /// Edge length of a rendered cell in surface pixels.
    pub cell_size: f32,
    /// Duration of a single move animation.
    pub step_duration: Duration,
    /// Whether the pointer hover preview is active.
    pub hover_enabled: bool,
}

/// Progress counters tracked over the lifetime of a single session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Number of completed moves; incremented exactly once per arrival.
    pub moves: u32,
    /// Simulated time elapsed since the session started, frozen on win.
    pub elapsed: Duration,
    /// One-way win flag, set when the player first reaches the goal.
    pub won: bool,
}

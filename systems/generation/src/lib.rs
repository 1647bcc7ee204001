#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Randomized maze generation with a guaranteed start-to-goal path.
//!
//! Generation carves a spanning tree over the even-coordinate lattice via
//! randomized depth-first backtracking, then force-opens a short corridor from
//! the goal back onto the carved lattice so the goal is reachable for every
//! seed, not merely most of them. A breadth-first verification runs before the
//! grid is handed out; an unsolvable maze is a generation failure, never a
//! shipped artifact.

use std::collections::VecDeque;

use maze_escape_core::{CellCoord, CellState, Direction, DifficultyProfile, MazeGrid};
use rand::{seq::SliceRandom as _, Rng};
use thiserror::Error;

/// Failures that prevent a maze from being generated.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    /// The requested dimensions leave no room for distinct start and goal cells.
    #[error("maze dimensions {columns}x{rows} leave no room for distinct start and goal cells")]
    DegenerateDimensions {
        /// Number of columns in the rejected request.
        columns: u32,
        /// Number of rows in the rejected request.
        rows: u32,
    },
    /// Verification found no open path from start to goal after the fix-up.
    #[error("generated {columns}x{rows} maze has no open path from start to goal")]
    UnreachableGoal {
        /// Number of columns in the failed maze.
        columns: u32,
        /// Number of rows in the failed maze.
        rows: u32,
    },
}

/// Generates a maze for the provided difficulty profile.
///
/// # Errors
///
/// Returns [`GenerationError`] when the profile's dimensions are degenerate or
/// when the carved maze fails connectivity verification.
pub fn generate<R: Rng>(
    profile: &DifficultyProfile,
    rng: &mut R,
) -> Result<MazeGrid, GenerationError> {
    generate_grid(profile.columns, profile.rows, rng)
}

/// Generates a maze with explicit dimensions.
///
/// The random source is injected so that fixed seeds reproduce identical
/// mazes; per-step neighbor shuffling is the sole consumer of entropy.
///
/// # Errors
///
/// Returns [`GenerationError`] when the dimensions are degenerate or when the
/// carved maze fails connectivity verification.
pub fn generate_grid<R: Rng>(
    columns: u32,
    rows: u32,
    rng: &mut R,
) -> Result<MazeGrid, GenerationError> {
    if columns < 2 || rows < 2 {
        return Err(GenerationError::DegenerateDimensions { columns, rows });
    }

    let mut cells = carve(columns, rows, rng);
    fix_up_goal(&mut cells, columns, rows);

    let grid = MazeGrid::from_cells(columns, rows, cells)
        .ok_or(GenerationError::DegenerateDimensions { columns, rows })?;

    if solve(&grid).is_none() {
        return Err(GenerationError::UnreachableGoal { columns, rows });
    }

    Ok(grid)
}

/// Finds a shortest open path from the grid's start to its goal.
///
/// Returns the full cell sequence including both endpoints, or `None` when no
/// path exists. Used by the connectivity verification and by adapters that
/// replay a solution.
#[must_use]
pub fn solve(grid: &MazeGrid) -> Option<Vec<CellCoord>> {
    let start = grid.start();
    let goal = grid.goal();
    if !grid.is_open(start) || !grid.is_open(goal) {
        return None;
    }
    if start == goal {
        return Some(vec![start]);
    }

    let columns = grid.columns();
    let rows = grid.rows();
    let count = columns as usize * rows as usize;
    let mut parents: Vec<Option<CellCoord>> = vec![None; count];
    let mut visited = vec![false; count];
    visited[cell_index(columns, start)] = true;

    let mut queue = VecDeque::new();
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == goal {
            return Some(reconstruct_path(&parents, columns, start, goal));
        }

        for direction in Direction::ALL {
            let Some(neighbor) = direction.apply(current, columns, rows) else {
                continue;
            };
            if !grid.is_open(neighbor) {
                continue;
            }

            let index = cell_index(columns, neighbor);
            if visited[index] {
                continue;
            }
            visited[index] = true;
            parents[index] = Some(current);
            queue.push_back(neighbor);
        }
    }

    None
}

fn reconstruct_path(
    parents: &[Option<CellCoord>],
    columns: u32,
    start: CellCoord,
    goal: CellCoord,
) -> Vec<CellCoord> {
    let mut path = vec![goal];
    let mut cursor = goal;
    while cursor != start {
        match parents[cell_index(columns, cursor)] {
            Some(previous) => {
                path.push(previous);
                cursor = previous;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

/// Carves a spanning tree over the even-coordinate lattice.
///
/// Walls between visited lattice cells live at odd coordinates and are opened
/// only where the walk crosses them. Neighbor order is reshuffled on every
/// step; that per-step randomization is the source of maze variety.
fn carve<R: Rng>(columns: u32, rows: u32, rng: &mut R) -> Vec<CellState> {
    let count = columns as usize * rows as usize;
    let mut cells = vec![CellState::Wall; count];

    let start = CellCoord::new(0, 0);
    cells[cell_index(columns, start)] = CellState::Open;
    let mut stack = vec![start];
    let mut directions = Direction::ALL;

    while let Some(&current) = stack.last() {
        directions.shuffle(rng);

        let mut carved = false;
        for direction in directions {
            let Some(connector) = direction.apply(current, columns, rows) else {
                continue;
            };
            let Some(neighbor) = direction.apply(connector, columns, rows) else {
                continue;
            };
            if cells[cell_index(columns, neighbor)] == CellState::Wall {
                cells[cell_index(columns, connector)] = CellState::Open;
                cells[cell_index(columns, neighbor)] = CellState::Open;
                stack.push(neighbor);
                carved = true;
                break;
            }
        }

        if !carved {
            let _ = stack.pop();
        }
    }

    cells
}

/// Force-opens the goal and a corridor back onto the carved lattice.
///
/// The depth-first walk exhausts every even-coordinate cell, so stepping left
/// until the column index is even and then up until the row index is even is
/// guaranteed to land on a carved cell. This makes goal reachability
/// deterministic rather than dependent on where the carve backtracked.
fn fix_up_goal(cells: &mut [CellState], columns: u32, rows: u32) {
    let mut cursor = CellCoord::new(columns - 1, rows - 1);
    cells[cell_index(columns, cursor)] = CellState::Open;

    while cursor.column() % 2 == 1 {
        cursor = CellCoord::new(cursor.column() - 1, cursor.row());
        cells[cell_index(columns, cursor)] = CellState::Open;
    }
    while cursor.row() % 2 == 1 {
        cursor = CellCoord::new(cursor.column(), cursor.row() - 1);
        cells[cell_index(columns, cursor)] = CellState::Open;
    }
}

fn cell_index(columns: u32, cell: CellCoord) -> usize {
    cell.row() as usize * columns as usize + cell.column() as usize
}

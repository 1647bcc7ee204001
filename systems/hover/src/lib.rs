#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pointer hover preview and click-to-move translation.
//!
//! The presenter recomputes its highlight set on every raw pointer-move event
//! and advances a cyclic color sweep once per drawn frame. Highlighting is
//! purely cosmetic; its only gameplay coupling is that a click while the set
//! is non-empty may emit a move command. Clicks are restricted to cells
//! exactly one cardinal step from the player, so a hovered cell further away
//! can never smuggle a multi-cell jump past the session's validation.

use glam::Vec2;
use maze_escape_core::{CellCoord, Command, Direction, MazeGrid};

/// Single highlighted cell together with its sweep hue.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverHighlight {
    /// Cell to highlight.
    pub cell: CellCoord,
    /// Hue fraction in `[0, 1)` assigned by the rotating sweep.
    pub hue: f32,
}

/// Pure system that tracks the cells highlighted under the pointer.
#[derive(Debug)]
pub struct HoverPresenter {
    enabled: bool,
    cells: Vec<CellCoord>,
    sweep_offset: usize,
}

impl HoverPresenter {
    /// Creates a presenter; a disabled presenter keeps its set empty.
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self {
            enabled,
            cells: Vec::new(),
            sweep_offset: 0,
        }
    }

    /// Recomputes the hover set from a raw pointer position.
    ///
    /// Pointers outside the surface, over walls, or with the preview disabled
    /// all resolve to an empty set; no error surfaces to the player.
    pub fn pointer_moved(&mut self, pointer: Vec2, grid: &MazeGrid, cell_size: f32) {
        self.cells.clear();
        if !self.enabled || cell_size <= 0.0 || pointer.x < 0.0 || pointer.y < 0.0 {
            return;
        }

        let cell = CellCoord::new(
            (pointer.x / cell_size) as u32,
            (pointer.y / cell_size) as u32,
        );
        if grid.is_open(cell) {
            self.cells.push(cell);
        }
    }

    /// Empties the hover set, e.g. when the pointer leaves the surface.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Cells currently highlighted, in hover order.
    #[must_use]
    pub fn cells(&self) -> &[CellCoord] {
        &self.cells
    }

    /// Advances the color sweep by one position; called once per drawn frame.
    pub fn advance_sweep(&mut self) {
        if !self.cells.is_empty() {
            self.sweep_offset = (self.sweep_offset + 1) % self.cells.len();
        }
    }

    /// Highlight instructions for the renderer, hues rotated by the sweep.
    pub fn overlay(&self) -> impl Iterator<Item = HoverHighlight> + '_ {
        let len = self.cells.len();
        let offset = self.sweep_offset;
        (0..len).map(move |position| {
            let index = (position + offset) % len;
            HoverHighlight {
                cell: self.cells[index],
                hue: index as f32 / len as f32,
            }
        })
    }

    /// Translates a click into a move command toward the hovered cell.
    ///
    /// Emits nothing when the set is empty or the hovered cell is not exactly
    /// one cardinal step from the player's logical coordinate.
    pub fn click(&self, player: CellCoord, out: &mut Vec<Command>) {
        let Some(&target) = self.cells.first() else {
            return;
        };
        if let Some(direction) = Direction::between(player, target) {
            out.push(Command::Move { direction });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_escape_core::CellState;

    fn checker_grid() -> MazeGrid {
        // 3x2 layout: open cells except a wall at (1, 0).
        let cells = vec![
            CellState::Open,
            CellState::Wall,
            CellState::Open,
            CellState::Open,
            CellState::Open,
            CellState::Open,
        ];
        MazeGrid::from_cells(3, 2, cells).expect("grid")
    }

    #[test]
    fn hovering_an_open_cell_yields_a_single_highlight() {
        let mut presenter = HoverPresenter::new(true);
        presenter.pointer_moved(Vec2::new(25.0, 15.0), &checker_grid(), 10.0);
        assert_eq!(presenter.cells(), &[CellCoord::new(2, 1)]);
    }

    #[test]
    fn hovering_a_wall_yields_an_empty_set() {
        let mut presenter = HoverPresenter::new(true);
        presenter.pointer_moved(Vec2::new(15.0, 5.0), &checker_grid(), 10.0);
        assert!(presenter.cells().is_empty());
    }

    #[test]
    fn pointer_outside_the_grid_yields_an_empty_set() {
        let mut presenter = HoverPresenter::new(true);
        presenter.pointer_moved(Vec2::new(95.0, 5.0), &checker_grid(), 10.0);
        assert!(presenter.cells().is_empty());

        presenter.pointer_moved(Vec2::new(-3.0, 5.0), &checker_grid(), 10.0);
        assert!(presenter.cells().is_empty());
    }

    #[test]
    fn disabled_presenter_never_highlights() {
        let mut presenter = HoverPresenter::new(false);
        presenter.pointer_moved(Vec2::new(5.0, 5.0), &checker_grid(), 10.0);
        assert!(presenter.cells().is_empty());

        let mut commands = Vec::new();
        presenter.click(CellCoord::new(0, 0), &mut commands);
        assert!(commands.is_empty());
    }

    #[test]
    fn click_on_adjacent_cell_emits_a_move() {
        let mut presenter = HoverPresenter::new(true);
        presenter.pointer_moved(Vec2::new(5.0, 15.0), &checker_grid(), 10.0);

        let mut commands = Vec::new();
        presenter.click(CellCoord::new(0, 0), &mut commands);
        assert_eq!(
            commands,
            vec![Command::Move {
                direction: Direction::South,
            }]
        );
    }

    #[test]
    fn click_on_distant_cell_emits_nothing() {
        let mut presenter = HoverPresenter::new(true);
        presenter.pointer_moved(Vec2::new(25.0, 15.0), &checker_grid(), 10.0);

        let mut commands = Vec::new();
        presenter.click(CellCoord::new(0, 0), &mut commands);
        assert!(commands.is_empty());
    }

    #[test]
    fn click_with_empty_set_emits_nothing() {
        let presenter = HoverPresenter::new(true);
        let mut commands = Vec::new();
        presenter.click(CellCoord::new(0, 0), &mut commands);
        assert!(commands.is_empty());
    }

    #[test]
    fn sweep_rotates_modulo_the_set_length() {
        let mut presenter = HoverPresenter::new(true);
        presenter.pointer_moved(Vec2::new(5.0, 5.0), &checker_grid(), 10.0);

        let before: Vec<_> = presenter.overlay().collect();
        assert_eq!(before.len(), 1);
        assert_eq!(before[0].hue, 0.0);

        presenter.advance_sweep();
        let after: Vec<_> = presenter.overlay().collect();
        assert_eq!(after, before, "a single-cell sweep is a fixed point");
    }

    #[test]
    fn sweep_with_empty_set_is_a_no_op() {
        let mut presenter = HoverPresenter::new(true);
        presenter.advance_sweep();
        assert_eq!(presenter.overlay().count(), 0);
    }
}

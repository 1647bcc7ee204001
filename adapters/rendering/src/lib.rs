#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for Maze Escape adapters.
//!
//! The core never owns a drawing surface; it composes a [`Scene`] of fill
//! instructions from immutable session snapshots, and adapters replay the
//! scene onto whatever [`Surface`] implementation they bring. The only
//! primitive required of a surface is "fill an axis-aligned rectangle".

use anyhow::Result as AnyResult;
use glam::Vec2;
use maze_escape_core::{CellCoord, CellState, Direction, MazeGrid};

/// RGBA color used when presenting frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity in the range 0.0..=1.0.
    pub alpha: f32,
}

impl Color {
    /// Creates a new color from floating point channels.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }

    /// Creates a fully saturated, half-lightness color from a hue fraction.
    ///
    /// This is the HSL(hue, 100%, 50%) ramp used by the hover sweep; the
    /// fraction wraps, so `0.0` and `1.0` both map to pure red.
    #[must_use]
    pub fn from_hue(fraction: f32) -> Self {
        let hue = fraction.rem_euclid(1.0) * 6.0;
        let x = 1.0 - (hue.rem_euclid(2.0) - 1.0).abs();
        let (red, green, blue) = match hue as u32 {
            0 => (1.0, x, 0.0),
            1 => (x, 1.0, 0.0),
            2 => (0.0, 1.0, x),
            3 => (0.0, x, 1.0),
            4 => (x, 0.0, 1.0),
            _ => (1.0, 0.0, x),
        };
        Self::new(red, green, blue, 1.0)
    }
}

/// Fill color for impassable wall cells.
pub const WALL_COLOR: Color = Color::from_rgb_u8(0x33, 0x33, 0x33);
/// Fill color for passable open cells.
pub const OPEN_COLOR: Color = Color::from_rgb_u8(0xf5, 0xf5, 0xf5);
/// Fill color for the goal cell.
pub const GOAL_COLOR: Color = Color::from_rgb_u8(0x4c, 0xaf, 0x50);
/// Fill color for the player token.
pub const PLAYER_COLOR: Color = Color::from_rgb_u8(0x21, 0x96, 0xf3);

/// Input snapshot gathered by adapters before updating the scene.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct FrameInput {
    /// Pointer position in surface pixels, when over the render surface.
    pub pointer_position: Option<Vec2>,
    /// Whether the adapter detected a pointer click on this frame.
    pub clicked: bool,
    /// Cardinal direction resolved from the held movement keys, if any.
    pub direction: Option<Direction>,
    /// Whether the player requested a session restart on this frame.
    pub restart: bool,
}

/// Single axis-aligned fill instruction within a scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectInstruction {
    /// Upper-left corner of the rectangle in surface pixels.
    pub origin: Vec2,
    /// Width and height of the rectangle in surface pixels.
    pub size: Vec2,
    /// Fill color of the rectangle.
    pub color: Color,
}

/// Ordered frame description consumed by rendering surfaces.
///
/// Draw order follows the original presentation: maze cells first, then the
/// hover overlay, the goal marker, and finally the player token at its
/// continuous position.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    surface_size: Vec2,
    rects: Vec<RectInstruction>,
}

impl Scene {
    /// Composes a frame from the session's immutable snapshots.
    ///
    /// `hover_overlay` carries `(cell, hue fraction)` pairs emitted by the
    /// hover presenter; `player_position` is the animation driver's
    /// continuous position.
    #[must_use]
    pub fn compose(
        grid: &MazeGrid,
        cell_size: f32,
        player_position: Vec2,
        hover_overlay: &[(CellCoord, f32)],
    ) -> Self {
        let cell_extent = Vec2::splat(cell_size);
        let mut rects = Vec::new();

        for row in 0..grid.rows() {
            for column in 0..grid.columns() {
                let cell = CellCoord::new(column, row);
                let color = match grid.state(cell) {
                    Some(CellState::Wall) => WALL_COLOR,
                    _ => OPEN_COLOR,
                };
                rects.push(RectInstruction {
                    origin: cell_origin(cell, cell_size),
                    size: cell_extent,
                    color,
                });
            }
        }

        for (cell, hue) in hover_overlay {
            rects.push(RectInstruction {
                origin: cell_origin(*cell, cell_size),
                size: cell_extent,
                color: Color::from_hue(*hue),
            });
        }

        rects.push(RectInstruction {
            origin: cell_origin(grid.goal(), cell_size),
            size: cell_extent,
            color: GOAL_COLOR,
        });

        rects.push(RectInstruction {
            origin: player_position,
            size: cell_extent,
            color: PLAYER_COLOR,
        });

        Self {
            surface_size: Vec2::new(
                grid.columns() as f32 * cell_size,
                grid.rows() as f32 * cell_size,
            ),
            rects,
        }
    }

    /// Required surface dimensions in pixels.
    #[must_use]
    pub const fn surface_size(&self) -> Vec2 {
        self.surface_size
    }

    /// Fill instructions in draw order.
    #[must_use]
    pub fn rects(&self) -> &[RectInstruction] {
        &self.rects
    }
}

fn cell_origin(cell: CellCoord, cell_size: f32) -> Vec2 {
    Vec2::new(
        cell.column() as f32 * cell_size,
        cell.row() as f32 * cell_size,
    )
}

/// Abstract 2D drawing surface consumed every frame, never owned by the core.
pub trait Surface {
    /// Fills an axis-aligned rectangle with a solid color.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying surface rejects the draw.
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) -> AnyResult<()>;
}

/// Replays a composed scene onto the provided surface in draw order.
///
/// # Errors
///
/// Propagates the first error reported by the surface.
pub fn present(scene: &Scene, surface: &mut dyn Surface) -> AnyResult<()> {
    for rect in scene.rects() {
        surface.fill_rect(rect.origin, rect.size, rect.color)?;
    }
    Ok(())
}

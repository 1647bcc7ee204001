#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Frame-driven interpolation of the player's continuous on-screen position.
//!
//! The driver is a two-state machine with a single `advance` operation fed
//! synthetic time deltas by whichever frame-scheduling primitive the adapter
//! uses. Between calls no work occurs; the interpolation math and the arrival
//! detection carry no dependency on any scheduler, which keeps them unit
//! testable in isolation.

use std::time::Duration;

use glam::Vec2;
use maze_escape_core::CellCoord;

/// Projects a logical cell coordinate to its pixel-space origin.
#[must_use]
pub fn cell_to_pixel(cell: CellCoord, cell_size: f32) -> Vec2 {
    Vec2::new(cell.column() as f32 * cell_size, cell.row() as f32 * cell_size)
}

/// Outcome of advancing the driver by one time delta.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Progress {
    /// No interpolation is in flight; the position is at rest.
    Idle,
    /// The interpolation advanced but has not yet reached its end position.
    Moving(Vec2),
    /// The interpolation reached its end position during this advance.
    ///
    /// Reported exactly once per started move; the driver returns to rest in
    /// the same call.
    Arrived(Vec2),
}

/// Interpolates the player's continuous position between two pixel anchors.
///
/// When no move is in flight the position equals the pixel projection of the
/// player's logical cell. Only one interpolation may be active at a time; the
/// session enforces the gate before calling [`PlayerAnimation::start`].
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerAnimation {
    position: Vec2,
    flight: Option<Flight>,
}

#[derive(Clone, Debug, PartialEq)]
struct Flight {
    from: Vec2,
    to: Vec2,
    duration: Duration,
    elapsed: Duration,
}

impl PlayerAnimation {
    /// Creates a driver resting at the provided pixel position.
    #[must_use]
    pub const fn at(position: Vec2) -> Self {
        Self {
            position,
            flight: None,
        }
    }

    /// Begins interpolating from the current position toward `to`.
    ///
    /// Starting while a flight is active replaces it; callers uphold the
    /// one-move-in-flight gate via [`PlayerAnimation::is_active`].
    pub fn start(&mut self, to: Vec2, duration: Duration) {
        self.flight = Some(Flight {
            from: self.position,
            to,
            duration,
            elapsed: Duration::ZERO,
        });
    }

    /// Advances the interpolation by the elapsed delta and reports progress.
    ///
    /// The elapsed-time fraction is clamped to `[0, 1]`, so any delta at or
    /// past the configured duration yields exactly the end position. A zero
    /// duration arrives on the first advance.
    pub fn advance(&mut self, dt: Duration) -> Progress {
        let Some(flight) = &mut self.flight else {
            return Progress::Idle;
        };

        flight.elapsed = flight.elapsed.saturating_add(dt);
        let fraction = if flight.duration.is_zero() {
            1.0
        } else {
            (flight.elapsed.as_secs_f32() / flight.duration.as_secs_f32()).min(1.0)
        };

        if fraction >= 1.0 {
            let end = flight.to;
            self.position = end;
            self.flight = None;
            Progress::Arrived(end)
        } else {
            self.position = flight.from.lerp(flight.to, fraction);
            Progress::Moving(self.position)
        }
    }

    /// Current continuous position in pixel space.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Reports whether an interpolation is currently in flight.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.flight.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_projection_scales_by_cell_size() {
        let pixel = cell_to_pixel(CellCoord::new(3, 2), 20.0);
        assert_eq!(pixel, Vec2::new(60.0, 40.0));
    }

    #[test]
    fn advance_interpolates_linearly() {
        let mut animation = PlayerAnimation::at(Vec2::ZERO);
        animation.start(Vec2::new(100.0, 0.0), Duration::from_millis(100));

        let progress = animation.advance(Duration::from_millis(50));
        let Progress::Moving(position) = progress else {
            panic!("expected an in-flight position, got {progress:?}");
        };
        assert!((position.x - 50.0).abs() < 0.5);
        assert_eq!(position.y, 0.0);
        assert!(animation.is_active());
    }

    #[test]
    fn overshoot_clamps_to_end_position() {
        let mut animation = PlayerAnimation::at(Vec2::new(10.0, 10.0));
        let end = Vec2::new(30.0, 10.0);
        animation.start(end, Duration::from_millis(70));

        assert_eq!(
            animation.advance(Duration::from_millis(500)),
            Progress::Arrived(end)
        );
        assert_eq!(animation.position(), end);
        assert!(!animation.is_active());
    }

    #[test]
    fn arrival_signals_exactly_once() {
        let mut animation = PlayerAnimation::at(Vec2::ZERO);
        let end = Vec2::new(20.0, 0.0);
        animation.start(end, Duration::from_millis(40));

        let mut arrivals = 0;
        for _ in 0..10 {
            if let Progress::Arrived(position) = animation.advance(Duration::from_millis(16)) {
                assert_eq!(position, end);
                arrivals += 1;
            }
        }
        assert_eq!(arrivals, 1);
        assert_eq!(animation.advance(Duration::from_millis(16)), Progress::Idle);
    }

    #[test]
    fn zero_duration_arrives_immediately() {
        let mut animation = PlayerAnimation::at(Vec2::ZERO);
        let end = Vec2::new(5.0, 5.0);
        animation.start(end, Duration::ZERO);

        assert_eq!(animation.advance(Duration::ZERO), Progress::Arrived(end));
        assert_eq!(animation.position(), end);
    }

    #[test]
    fn exact_duration_yields_exact_end_position() {
        let mut animation = PlayerAnimation::at(Vec2::new(1.0, 2.0));
        let end = Vec2::new(9.0, 2.0);
        animation.start(end, Duration::from_millis(150));

        assert_eq!(
            animation.advance(Duration::from_millis(150)),
            Progress::Arrived(end)
        );
    }
}

#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative session state management for Maze Escape.
//!
//! One [`Session`] value owns everything a single playthrough needs: the
//! installed maze, the player's logical cell, and the in-flight move
//! animation. All mutation flows through [`apply`]; read access flows through
//! the [`query`] module. Restarting installs a fresh maze and replaces the
//! movable state wholesale, which is the only way to abort an in-flight move.

use maze_escape_core::{
    CellCoord, Command, Difficulty, DifficultyProfile, Event, MazeGrid, MoveRejection,
    WELCOME_BANNER,
};
use maze_escape_system_animation::{cell_to_pixel, PlayerAnimation, Progress};

/// Represents the authoritative state of a single Maze Escape session.
#[derive(Debug)]
pub struct Session {
    banner: &'static str,
    grid: MazeGrid,
    profile: DifficultyProfile,
    player: CellCoord,
    pending: Option<CellCoord>,
    animation: PlayerAnimation,
    tick_index: u64,
}

impl Session {
    /// Creates a new session holding an all-open grid at the default profile.
    ///
    /// Adapters are expected to install a generated maze before play begins;
    /// the initial grid merely keeps every invariant satisfied until then.
    #[must_use]
    pub fn new() -> Self {
        let profile = Difficulty::default().profile();
        let grid = MazeGrid::open(profile.columns, profile.rows);
        let player = grid.start();
        let animation = PlayerAnimation::at(cell_to_pixel(player, profile.cell_size));
        Self {
            banner: WELCOME_BANNER,
            grid,
            profile,
            player,
            pending: None,
            animation,
            tick_index: 0,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies the provided command to the session, mutating state deterministically.
pub fn apply(session: &mut Session, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::InstallMaze { grid, profile } => {
            // Wholesale replacement: the previous animation is discarded with
            // the rest of the movable state, so no stale flight can write a
            // position into the new session.
            session.profile = profile;
            session.player = grid.start();
            session.pending = None;
            session.animation =
                PlayerAnimation::at(cell_to_pixel(grid.start(), profile.cell_size));
            out_events.push(Event::MazeInstalled {
                columns: grid.columns(),
                rows: grid.rows(),
            });
            session.grid = grid;
        }
        Command::Move { direction } => {
            if session.animation.is_active() {
                out_events.push(Event::MoveRejected {
                    direction,
                    reason: MoveRejection::AnimationInFlight,
                });
                return;
            }

            let Some(target) = direction.apply(
                session.player,
                session.grid.columns(),
                session.grid.rows(),
            ) else {
                out_events.push(Event::MoveRejected {
                    direction,
                    reason: MoveRejection::OutOfBounds,
                });
                return;
            };

            if !session.grid.is_open(target) {
                out_events.push(Event::MoveRejected {
                    direction,
                    reason: MoveRejection::Blocked,
                });
                return;
            }

            session.pending = Some(target);
            session.animation.start(
                cell_to_pixel(target, session.profile.cell_size),
                session.profile.step_duration,
            );
            out_events.push(Event::MoveStarted {
                from: session.player,
                to: target,
            });
        }
        Command::Tick { dt } => {
            session.tick_index = session.tick_index.saturating_add(1);
            out_events.push(Event::TimeAdvanced { dt });

            // The logical coordinate commits on arrival, never on acceptance;
            // the move counter and goal check downstream hang off these events.
            if let Progress::Arrived(_) = session.animation.advance(dt) {
                if let Some(target) = session.pending.take() {
                    let from = session.player;
                    session.player = target;
                    out_events.push(Event::PlayerArrived { from, to: target });
                    if target == session.grid.goal() {
                        out_events.push(Event::GoalReached { cell: target });
                    }
                }
            }
        }
    }
}

/// Query functions that provide read-only access to the session state.
pub mod query {
    use glam::Vec2;
    use maze_escape_core::{CellCoord, DifficultyProfile, MazeGrid};

    use super::Session;

    /// Retrieves the welcome banner that adapters may display to players.
    #[must_use]
    pub fn welcome_banner(session: &Session) -> &'static str {
        session.banner
    }

    /// Provides read-only access to the installed maze grid.
    #[must_use]
    pub fn grid(session: &Session) -> &MazeGrid {
        &session.grid
    }

    /// Provides read-only access to the active difficulty profile.
    #[must_use]
    pub fn profile(session: &Session) -> &DifficultyProfile {
        &session.profile
    }

    /// Authoritative logical cell currently occupied by the player.
    #[must_use]
    pub fn player_cell(session: &Session) -> CellCoord {
        session.player
    }

    /// Continuous pixel-space position of the player token.
    ///
    /// Lags the logical cell while a move animation is in flight and equals
    /// its pixel projection otherwise.
    #[must_use]
    pub fn player_position(session: &Session) -> Vec2 {
        session.animation.position()
    }

    /// Reports whether a move animation is currently in flight.
    #[must_use]
    pub fn animation_in_flight(session: &Session) -> bool {
        session.animation.is_active()
    }

    /// Goal cell of the installed maze.
    #[must_use]
    pub fn goal(session: &Session) -> CellCoord {
        session.grid.goal()
    }

    /// Number of ticks processed since the session was created.
    #[must_use]
    pub fn tick_index(session: &Session) -> u64 {
        session.tick_index
    }
}

#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure progress-tracking system for move count, elapsed time, and the win.
//!
//! The tracker consumes session events and never calls into any UI by name;
//! presentation-layer reactions are published through the [`PresentationSink`]
//! observer that adapters implement. The elapsed-time display updates at
//! whole-second granularity, independent of the animation frame rate.

use std::time::Duration;

use maze_escape_core::{Event, SessionStats};

/// Summary handed to the presentation layer exactly once per won session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinSummary {
    /// Number of completed moves when the goal was reached.
    pub moves: u32,
    /// Elapsed session time frozen at the moment of the win.
    pub elapsed: Duration,
}

/// Observer interface through which the tracker publishes side effects.
///
/// Implementations own the externally-visible surfaces: the move and timer
/// displays, the win message, and the audio cue. The cue is fire-and-forget;
/// a sink that cannot play it simply skips it.
pub trait PresentationSink {
    /// Called whenever the displayed statistics change.
    fn stats_changed(&mut self, stats: SessionStats);

    /// Called exactly once per session when the player first reaches the goal.
    fn session_won(&mut self, summary: WinSummary);
}

/// Pure system that folds session events into progress statistics.
#[derive(Debug, Default)]
pub struct SessionTracker {
    stats: SessionStats,
    displayed_seconds: u64,
}

impl SessionTracker {
    /// Creates a tracker with zeroed statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current statistics snapshot.
    #[must_use]
    pub const fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Consumes session events and publishes display updates to the sink.
    pub fn handle(&mut self, events: &[Event], sink: &mut dyn PresentationSink) {
        for event in events {
            match event {
                Event::MazeInstalled { .. } => {
                    self.stats = SessionStats::default();
                    self.displayed_seconds = 0;
                    sink.stats_changed(self.stats);
                }
                Event::TimeAdvanced { dt } => {
                    if self.stats.won {
                        continue;
                    }
                    self.stats.elapsed = self.stats.elapsed.saturating_add(*dt);
                    let seconds = self.stats.elapsed.as_secs();
                    if seconds != self.displayed_seconds {
                        self.displayed_seconds = seconds;
                        sink.stats_changed(self.stats);
                    }
                }
                Event::PlayerArrived { .. } => {
                    self.stats.moves = self.stats.moves.saturating_add(1);
                    sink.stats_changed(self.stats);
                }
                Event::GoalReached { .. } => {
                    if self.stats.won {
                        continue;
                    }
                    self.stats.won = true;
                    sink.session_won(WinSummary {
                        moves: self.stats.moves,
                        elapsed: self.stats.elapsed,
                    });
                    sink.stats_changed(self.stats);
                }
                Event::MoveStarted { .. } | Event::MoveRejected { .. } => {}
            }
        }
    }
}

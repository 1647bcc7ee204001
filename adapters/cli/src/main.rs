#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that boots and replays a Maze Escape session.
//!
//! The binary generates a maze for the selected difficulty, installs it into
//! a fresh session, and replays the shortest solution frame by frame through
//! the same command/event loop an interactive adapter would drive. Steering
//! goes through the hover presenter whenever the profile enables it, so every
//! input path gets exercised headlessly.

use std::time::Duration;

use anyhow::{Context as _, Result};
use clap::{Parser, ValueEnum};
use glam::Vec2;
use maze_escape_core::{CellCoord, Command, Difficulty, Direction};
use maze_escape_rendering::{
    present, Color, FrameInput, Scene, Surface, GOAL_COLOR, OPEN_COLOR, PLAYER_COLOR, WALL_COLOR,
};
use maze_escape_system_generation as generation;
use maze_escape_system_hover::HoverPresenter;
use maze_escape_system_session::{PresentationSink, SessionTracker, WinSummary};
use maze_escape_world::{self as world, query, Session};
use rand::SeedableRng as _;
use rand_chacha::ChaCha8Rng;

/// Difficulty selections accepted on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum DifficultyArg {
    /// 20x12 maze, slow steps.
    Easy,
    /// 30x20 maze, standard steps.
    Medium,
    /// 40x25 maze, fast steps, hover preview disabled.
    Hard,
    /// Fallback matching the medium configuration.
    Default,
}

impl From<DifficultyArg> for Difficulty {
    fn from(value: DifficultyArg) -> Self {
        match value {
            DifficultyArg::Easy => Self::Easy,
            DifficultyArg::Medium => Self::Medium,
            DifficultyArg::Hard => Self::Hard,
            DifficultyArg::Default => Self::Default,
        }
    }
}

/// Command-line options for the Maze Escape demo playthrough.
#[derive(Debug, Parser)]
#[command(name = "maze-escape")]
struct Args {
    /// Difficulty profile used for maze generation.
    #[arg(long, value_enum, default_value_t = DifficultyArg::Default)]
    difficulty: DifficultyArg,

    /// Seed for the maze generator; drawn from entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Simulated frame delta in milliseconds.
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,

    /// Suppress per-move and per-second display updates.
    #[arg(long)]
    quiet: bool,
}

/// Presentation sink that writes the externally-owned displays to stdout.
struct StdoutSink {
    quiet: bool,
}

impl PresentationSink for StdoutSink {
    fn stats_changed(&mut self, stats: maze_escape_core::SessionStats) {
        if !self.quiet {
            println!("moves: {}  time: {}s", stats.moves, stats.elapsed.as_secs());
        }
    }

    fn session_won(&mut self, summary: WinSummary) {
        println!(
            "You escaped the maze! {} moves in {}s.",
            summary.moves,
            summary.elapsed.as_secs()
        );
        // Audio is fire-and-forget; this adapter's cue is a log line.
        println!("[cue] win chime");
    }
}

/// Character-cell surface that renders fill instructions as glyphs.
struct TextSurface {
    columns: usize,
    rows: usize,
    cell_size: f32,
    glyphs: Vec<char>,
}

impl TextSurface {
    fn new(columns: u32, rows: u32, cell_size: f32) -> Self {
        let columns = columns as usize;
        let rows = rows as usize;
        Self {
            columns,
            rows,
            cell_size,
            glyphs: vec![' '; columns * rows],
        }
    }

    fn render(&self) -> String {
        let mut text = String::with_capacity(self.rows * (self.columns + 1));
        for row in 0..self.rows {
            for column in 0..self.columns {
                text.push(self.glyphs[row * self.columns + column]);
            }
            text.push('\n');
        }
        text
    }
}

impl Surface for TextSurface {
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) -> Result<()> {
        let glyph = glyph_for(color);
        let first_column = (origin.x / self.cell_size).floor().max(0.0) as usize;
        let first_row = (origin.y / self.cell_size).floor().max(0.0) as usize;
        let last_column = ((origin.x + size.x - 1.0) / self.cell_size).floor().max(0.0) as usize;
        let last_row = ((origin.y + size.y - 1.0) / self.cell_size).floor().max(0.0) as usize;

        for row in first_row..=last_row.min(self.rows.saturating_sub(1)) {
            for column in first_column..=last_column.min(self.columns.saturating_sub(1)) {
                self.glyphs[row * self.columns + column] = glyph;
            }
        }
        Ok(())
    }
}

fn glyph_for(color: Color) -> char {
    if colors_match(color, WALL_COLOR) {
        '#'
    } else if colors_match(color, OPEN_COLOR) {
        '.'
    } else if colors_match(color, GOAL_COLOR) {
        'G'
    } else if colors_match(color, PLAYER_COLOR) {
        '@'
    } else {
        '*'
    }
}

fn colors_match(lhs: Color, rhs: Color) -> bool {
    (lhs.red - rhs.red).abs() < 1e-3
        && (lhs.green - rhs.green).abs() < 1e-3
        && (lhs.blue - rhs.blue).abs() < 1e-3
}

fn cell_center(cell: CellCoord, cell_size: f32) -> Vec2 {
    Vec2::new(
        (cell.column() as f32 + 0.5) * cell_size,
        (cell.row() as f32 + 0.5) * cell_size,
    )
}

/// Translates a gathered input snapshot into session commands.
///
/// Pointer input steers through the hover presenter; the resolved keyboard
/// direction only applies when no click produced a command, mirroring how an
/// interactive frame would prioritize the two sources.
fn translate_input(
    input: FrameInput,
    hover: &mut HoverPresenter,
    session: &Session,
    out: &mut Vec<Command>,
) {
    let cell_size = query::profile(session).cell_size;
    if let Some(pointer) = input.pointer_position {
        hover.pointer_moved(pointer, query::grid(session), cell_size);
    }
    if input.clicked {
        hover.click(query::player_cell(session), out);
    }
    if out.is_empty() {
        if let Some(direction) = input.direction {
            out.push(Command::Move { direction });
        }
    }
}

fn print_frame(session: &Session, overlay: &[(CellCoord, f32)]) -> Result<()> {
    let grid = query::grid(session);
    let profile = query::profile(session);
    let scene = Scene::compose(
        grid,
        profile.cell_size,
        query::player_position(session),
        overlay,
    );
    let mut surface = TextSurface::new(grid.columns(), grid.rows(), profile.cell_size);
    present(&scene, &mut surface)?;
    print!("{}", surface.render());
    Ok(())
}

/// Entry point for the Maze Escape command-line interface.
fn main() -> Result<()> {
    let args = Args::parse();
    let difficulty = Difficulty::from(args.difficulty);
    let profile = difficulty.profile();

    let mut rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let grid = generation::generate(&profile, &mut rng)
        .with_context(|| format!("generating a {difficulty:?} maze"))?;
    let solution = generation::solve(&grid).context("generated maze has no solution")?;

    let mut session = Session::new();
    let mut tracker = SessionTracker::new();
    let mut sink = StdoutSink { quiet: args.quiet };
    let mut hover = HoverPresenter::new(profile.hover_enabled);
    let frame = Duration::from_millis(args.frame_ms.max(1));

    let mut events = Vec::new();
    world::apply(
        &mut session,
        Command::InstallMaze { grid, profile },
        &mut events,
    );
    tracker.handle(&events, &mut sink);

    println!("{}", query::welcome_banner(&session));
    print_frame(&session, &[])?;

    for window in solution.windows(2) {
        let (from, to) = (window[0], window[1]);
        let input = FrameInput {
            pointer_position: Some(cell_center(to, profile.cell_size)),
            clicked: true,
            direction: Direction::between(from, to),
            restart: false,
        };

        let mut commands = Vec::new();
        translate_input(input, &mut hover, &session, &mut commands);
        for command in commands {
            events.clear();
            world::apply(&mut session, command, &mut events);
            tracker.handle(&events, &mut sink);
        }

        while query::animation_in_flight(&session) {
            events.clear();
            world::apply(&mut session, Command::Tick { dt: frame }, &mut events);
            tracker.handle(&events, &mut sink);
            hover.advance_sweep();
        }
    }

    let overlay: Vec<(CellCoord, f32)> = hover
        .overlay()
        .map(|highlight| (highlight.cell, highlight.hue))
        .collect();
    print_frame(&session, &overlay)?;

    let stats = tracker.stats();
    println!(
        "final: {} moves in {}s{}",
        stats.moves,
        stats.elapsed.as_secs(),
        if stats.won { ", escaped" } else { "" }
    );
    Ok(())
}

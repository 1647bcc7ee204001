use std::time::Duration;

use maze_escape_core::{
    CellCoord, CellState, Command, DifficultyProfile, Direction, Event, MazeGrid, MoveRejection,
};
use maze_escape_system_animation::cell_to_pixel;
use maze_escape_world::{self as world, query, Session};

fn grid_from_rows(rows: &[&str]) -> MazeGrid {
    let height = u32::try_from(rows.len()).expect("row count");
    let width = u32::try_from(rows[0].len()).expect("column count");
    let cells: Vec<CellState> = rows
        .iter()
        .flat_map(|row| {
            row.chars().map(|glyph| match glyph {
                '#' => CellState::Wall,
                _ => CellState::Open,
            })
        })
        .collect();
    MazeGrid::from_cells(width, height, cells).expect("test grid")
}

fn test_profile(columns: u32, rows: u32) -> DifficultyProfile {
    DifficultyProfile {
        columns,
        rows,
        cell_size: 10.0,
        step_duration: Duration::from_millis(100),
        hover_enabled: true,
    }
}

fn install(session: &mut Session, grid: MazeGrid) -> Vec<Event> {
    let profile = test_profile(grid.columns(), grid.rows());
    let mut events = Vec::new();
    world::apply(session, Command::InstallMaze { grid, profile }, &mut events);
    events
}

fn tick(session: &mut Session, millis: u64) -> Vec<Event> {
    let mut events = Vec::new();
    world::apply(
        session,
        Command::Tick {
            dt: Duration::from_millis(millis),
        },
        &mut events,
    );
    events
}

#[test]
fn move_into_wall_is_rejected_without_state_change() {
    let mut session = Session::new();
    let _ = install(&mut session, grid_from_rows(&[".#.", "..."]));

    let mut events = Vec::new();
    world::apply(
        &mut session,
        Command::Move {
            direction: Direction::East,
        },
        &mut events,
    );

    assert_eq!(
        events,
        vec![Event::MoveRejected {
            direction: Direction::East,
            reason: MoveRejection::Blocked,
        }]
    );
    assert_eq!(query::player_cell(&session), CellCoord::new(0, 0));
    assert!(!query::animation_in_flight(&session));
}

#[test]
fn move_out_of_bounds_is_rejected() {
    let mut session = Session::new();
    let _ = install(&mut session, MazeGrid::open(3, 3));

    let mut events = Vec::new();
    world::apply(
        &mut session,
        Command::Move {
            direction: Direction::North,
        },
        &mut events,
    );

    assert_eq!(
        events,
        vec![Event::MoveRejected {
            direction: Direction::North,
            reason: MoveRejection::OutOfBounds,
        }]
    );
    assert_eq!(query::player_cell(&session), CellCoord::new(0, 0));
}

#[test]
fn accepted_move_commits_only_on_arrival() {
    let mut session = Session::new();
    let _ = install(&mut session, MazeGrid::open(3, 3));

    let mut events = Vec::new();
    world::apply(
        &mut session,
        Command::Move {
            direction: Direction::East,
        },
        &mut events,
    );
    assert_eq!(
        events,
        vec![Event::MoveStarted {
            from: CellCoord::new(0, 0),
            to: CellCoord::new(1, 0),
        }]
    );
    assert_eq!(query::player_cell(&session), CellCoord::new(0, 0));
    assert!(query::animation_in_flight(&session));

    let halfway = tick(&mut session, 50);
    assert!(halfway
        .iter()
        .all(|event| !matches!(event, Event::PlayerArrived { .. })));
    assert_eq!(query::player_cell(&session), CellCoord::new(0, 0));

    let arrival = tick(&mut session, 60);
    assert!(arrival.contains(&Event::PlayerArrived {
        from: CellCoord::new(0, 0),
        to: CellCoord::new(1, 0),
    }));
    assert_eq!(query::player_cell(&session), CellCoord::new(1, 0));
    assert!(!query::animation_in_flight(&session));
    assert_eq!(
        query::player_position(&session),
        cell_to_pixel(CellCoord::new(1, 0), 10.0)
    );
}

#[test]
fn second_move_is_rejected_while_animation_in_flight() {
    let mut session = Session::new();
    let _ = install(&mut session, MazeGrid::open(3, 3));

    let mut events = Vec::new();
    world::apply(
        &mut session,
        Command::Move {
            direction: Direction::East,
        },
        &mut events,
    );
    events.clear();
    world::apply(
        &mut session,
        Command::Move {
            direction: Direction::South,
        },
        &mut events,
    );

    assert_eq!(
        events,
        vec![Event::MoveRejected {
            direction: Direction::South,
            reason: MoveRejection::AnimationInFlight,
        }]
    );
}

#[test]
fn arrival_at_goal_emits_goal_reached() {
    let mut session = Session::new();
    let _ = install(&mut session, MazeGrid::open(2, 1));

    let mut events = Vec::new();
    world::apply(
        &mut session,
        Command::Move {
            direction: Direction::East,
        },
        &mut events,
    );
    let arrival = tick(&mut session, 150);

    assert!(arrival.contains(&Event::PlayerArrived {
        from: CellCoord::new(0, 0),
        to: CellCoord::new(1, 0),
    }));
    assert!(arrival.contains(&Event::GoalReached {
        cell: CellCoord::new(1, 0),
    }));

    let arrived_at = arrival
        .iter()
        .position(|event| matches!(event, Event::PlayerArrived { .. }))
        .expect("arrival event");
    let goal_at = arrival
        .iter()
        .position(|event| matches!(event, Event::GoalReached { .. }))
        .expect("goal event");
    assert!(arrived_at < goal_at, "arrival must precede the goal check");
}

#[test]
fn install_discards_in_flight_move() {
    let mut session = Session::new();
    let _ = install(&mut session, MazeGrid::open(3, 3));

    let mut events = Vec::new();
    world::apply(
        &mut session,
        Command::Move {
            direction: Direction::East,
        },
        &mut events,
    );
    assert!(query::animation_in_flight(&session));

    let installed = install(&mut session, MazeGrid::open(4, 4));
    assert_eq!(
        installed,
        vec![Event::MazeInstalled {
            columns: 4,
            rows: 4
        }]
    );
    assert_eq!(query::player_cell(&session), CellCoord::new(0, 0));
    assert!(!query::animation_in_flight(&session));

    // The discarded flight must not produce a stale arrival in the new session.
    let events = tick(&mut session, 500);
    assert_eq!(
        events,
        vec![Event::TimeAdvanced {
            dt: Duration::from_millis(500),
        }]
    );
    assert_eq!(query::player_cell(&session), CellCoord::new(0, 0));
}

#[test]
fn five_by_five_scenario_counts_a_single_completed_move() {
    let mut session = Session::new();
    let grid = grid_from_rows(&[".....", ".###.", ".....", ".###.", "....."]);
    let _ = install(&mut session, grid);

    let mut events = Vec::new();
    world::apply(
        &mut session,
        Command::Move {
            direction: Direction::East,
        },
        &mut events,
    );
    assert!(matches!(events[0], Event::MoveStarted { .. }));

    let arrival = tick(&mut session, 100);
    let arrivals = arrival
        .iter()
        .filter(|event| matches!(event, Event::PlayerArrived { .. }))
        .count();
    assert_eq!(arrivals, 1);
    assert_eq!(query::player_cell(&session), CellCoord::new(1, 0));
}

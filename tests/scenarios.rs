use std::{
    collections::{HashSet, VecDeque},
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use mazetrace::{
    AnimationDriver, Location, MazeConfig, MazeError, MazeEvent, Phase, Seed, Side,
    generators::generate_maze, maze::Maze, solvers::solve_maze,
};

fn config(col_count: u16, row_count: u16, seed: Seed) -> MazeConfig {
    MazeConfig {
        col_count,
        row_count,
        seed,
        step_delay: Duration::ZERO,
        ..MazeConfig::default()
    }
}

fn run_to_completion(config: MazeConfig) -> Vec<MazeEvent> {
    let (tx, rx) = std::sync::mpsc::sync_channel(8);
    let handle = AnimationDriver::new(config, Arc::default()).spawn(tx);
    let events = rx.iter().collect::<Vec<_>>();
    handle.join().unwrap().unwrap();
    events
}

fn opened_walls(events: &[MazeEvent]) -> Vec<(Location, Side)> {
    events
        .iter()
        .filter_map(|e| match *e {
            MazeEvent::WallOpened { location, side } => Some((location, side)),
            _ => None,
        })
        .collect()
}

/// Cells on the entrance-exit route, found by a breadth-first walk of open walls.
fn route_len(maze: &Maze) -> usize {
    let grid = maze.grid();
    let mut dist = vec![(maze.entrance(), 1usize)];
    let mut queue = VecDeque::from([(maze.entrance(), 1usize)]);
    while let Some((cell, d)) = queue.pop_front() {
        if cell == maze.exit() {
            return d;
        }
        for side in Side::ALL {
            if let Some(n) = grid.neighbor(cell, side) {
                if grid.is_passage(cell, side) && dist.iter().all(|&(c, _)| c != n) {
                    dist.push((n, d + 1));
                    queue.push_back((n, d + 1));
                }
            }
        }
    }
    0
}

#[test]
fn three_by_three_is_reproducible() {
    let first = run_to_completion(config(3, 3, Seed(0, 0)));
    let second = run_to_completion(config(3, 3, Seed(0, 0)));
    assert_eq!(first, second);

    let at = |x, y, side| (Location::new(x, y), side);
    assert_eq!(
        opened_walls(&first),
        vec![
            at(0, 0, Side::Top),
            at(0, 0, Side::Right),
            at(1, 0, Side::Right),
            at(2, 0, Side::Bottom),
            at(2, 1, Side::Bottom),
            at(2, 2, Side::Left),
            at(1, 2, Side::Left),
            at(0, 2, Side::Top),
            at(0, 1, Side::Right),
            at(2, 2, Side::Bottom),
        ]
    );
}

#[test]
fn three_by_three_path_matches_carved_route() {
    let mut maze = Maze::new(config(3, 3, Seed(0, 0))).unwrap();
    generate_maze(&mut maze, &mut Vec::new()).unwrap();
    assert_eq!(maze.grid().internal_passages(), 8);
    let path = solve_maze(&mut maze, &mut Vec::new()).unwrap().unwrap();
    assert_eq!(
        path,
        vec![
            Location::new(0, 0),
            Location::new(1, 0),
            Location::new(2, 0),
            Location::new(2, 1),
            Location::new(2, 2),
        ]
    );
    assert_eq!(path.len(), route_len(&maze));
    // One open internal wall crossed per step
    let crossed = path
        .windows(2)
        .filter(|pair| {
            Side::ALL
                .into_iter()
                .any(|side| pair[0].step(side) == pair[1] && maze.grid().is_passage(pair[0], side))
        })
        .count();
    assert_eq!(crossed, path.len() - 1);
}

#[test]
fn single_cell_run() {
    let events = run_to_completion(config(1, 1, Seed(0, 0)));
    let cell = Location::new(0, 0);
    assert_eq!(
        events,
        vec![
            MazeEvent::Initial {
                col_count: 1,
                row_count: 1,
                cell_size: 2
            },
            MazeEvent::PhaseStarted(Phase::Generating),
            MazeEvent::WallOpened {
                location: cell,
                side: Side::Top
            },
            MazeEvent::WallOpened {
                location: cell,
                side: Side::Bottom
            },
            MazeEvent::PhaseStarted(Phase::Solving),
            MazeEvent::Finished {
                solved: true,
                path_len: 1
            },
        ]
    );
}

#[test]
fn segments_without_backtracks_form_a_simple_path() {
    let events = run_to_completion(config(30, 20, Seed(77, 3)));
    let mut path = vec![Location::new(0, 0)];
    for event in &events {
        if let MazeEvent::Segment {
            source,
            target,
            backtrack,
        } = *event
        {
            if backtrack {
                assert_eq!(path.pop(), Some(target));
            }
            assert_eq!(path.last(), Some(&source));
            if !backtrack {
                path.push(target);
            }
        }
    }
    assert_eq!(path.last(), Some(&Location::new(29, 19)));
    let unique = path.iter().collect::<HashSet<_>>();
    assert_eq!(unique.len(), path.len());
    assert_eq!(
        events.last(),
        Some(&MazeEvent::Finished {
            solved: true,
            path_len: path.len()
        })
    );
}

#[test]
fn cancel_mid_generation_stops_the_run() {
    let cancel = Arc::new(AtomicBool::new(false));
    let mut config = config(40, 40, Seed(1, 1));
    config.step_delay = Duration::from_millis(1);
    let (tx, rx) = std::sync::mpsc::sync_channel(0);
    let handle = AnimationDriver::new(config, cancel.clone()).spawn(tx);

    let mut seen = Vec::new();
    for event in rx.iter() {
        seen.push(event);
        if seen.len() == 20 {
            cancel.store(true, Ordering::Relaxed);
        }
    }

    assert_eq!(handle.join().unwrap(), Err(MazeError::Cancelled));
    // Left where it stopped: still carving, nothing solved
    assert!(seen.len() < 40 * 40);
    assert!(!seen.iter().any(|e| matches!(e, MazeEvent::PhaseStarted(Phase::Solving))));
}

#[test]
fn large_grid_runs_without_recursion() {
    let events = run_to_completion(config(400, 300, Seed(9, 9)));
    assert_eq!(opened_walls(&events).len(), 400 * 300 + 1);
    assert!(matches!(
        events.last(),
        Some(MazeEvent::Finished { solved: true, .. })
    ));
}

use crate::{
    error::Result,
    maze::{Grid, Location, Side, StepObserver},
};

/// Direction try order, fixed for a stable replay.
const SEARCH_ORDER: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

/// A cell on the current search branch and the next direction to try from it.
struct Frame {
    location: Location,
    next_side: usize,
}

/// Depth-first search from `start` to `goal` through open walls only.
///
/// Each step onto a new cell is reported as a drawn segment; a branch that
/// dead-ends is reported again with `backtrack` set. Returns the path
/// `start..=goal` or `None` when the two cells are not connected.
/// Visited marks must be clear before the call; walls are never touched.
pub fn solve_dfs<O: StepObserver>(
    grid: &mut Grid,
    start: Location,
    goal: Location,
    observer: &mut O,
) -> Result<Option<Vec<Location>>> {
    grid.set_visited(start)?;
    if start == goal {
        return Ok(Some(vec![start]));
    }

    let mut stack = vec![Frame {
        location: start,
        next_side: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let current = frame.location;
        let next = SEARCH_ORDER[frame.next_side.min(SEARCH_ORDER.len())..]
            .iter()
            .enumerate()
            .find_map(|(offset, &side)| {
                grid.neighbor(current, side)
                    .filter(|&n| !grid.is_visited(n) && grid.is_passage(current, side))
                    .map(|n| (frame.next_side + offset, n))
            });

        match next {
            Some((tried, neighbor)) => {
                frame.next_side = tried + 1;
                observer.on_segment(current, neighbor, false)?;
                grid.set_visited(neighbor)?;
                if neighbor == goal {
                    let mut path = stack.iter().map(|f| f.location).collect::<Vec<_>>();
                    path.push(neighbor);
                    return Ok(Some(path));
                }
                stack.push(Frame {
                    location: neighbor,
                    next_side: 0,
                });
            }
            None => {
                // Dead end: undo the segment that led here
                stack.pop();
                if let Some(parent) = stack.last() {
                    tracing::trace!("[solve] backtrack {:?} -> {:?}", current, parent.location);
                    observer.on_segment(parent.location, current, true)?;
                }
            }
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::MazeEvent;

    /// Serpentine corridor through a 3x2 grid: (0,0) (1,0) (2,0) (2,1) (1,1) (0,1).
    fn corridor() -> Grid {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.hide_wall(Location::new(0, 0), Side::Right).unwrap();
        grid.hide_wall(Location::new(1, 0), Side::Right).unwrap();
        grid.hide_wall(Location::new(2, 0), Side::Bottom).unwrap();
        grid.hide_wall(Location::new(2, 1), Side::Left).unwrap();
        grid.hide_wall(Location::new(1, 1), Side::Left).unwrap();
        grid
    }

    #[test]
    fn test_follows_single_corridor() {
        let mut grid = corridor();
        let mut events = Vec::new();
        let path = solve_dfs(&mut grid, Location::new(0, 0), Location::new(0, 1), &mut events)
            .unwrap()
            .unwrap();
        assert_eq!(path.len(), 6);
        assert_eq!(events.len(), 5);
        assert!(events.iter().all(|e| matches!(
            e,
            MazeEvent::Segment {
                backtrack: false,
                ..
            }
        )));
    }

    #[test]
    fn test_backtracks_out_of_dead_end() {
        // (0,0) branches up-first order: right to a dead end (1,0), down to the goal (0,1)
        let mut grid = Grid::new(2, 2).unwrap();
        grid.hide_wall(Location::new(0, 0), Side::Right).unwrap();
        grid.hide_wall(Location::new(0, 0), Side::Bottom).unwrap();
        let mut events = Vec::new();
        let path = solve_dfs(&mut grid, Location::new(0, 0), Location::new(0, 1), &mut events)
            .unwrap()
            .unwrap();
        assert_eq!(path, vec![Location::new(0, 0), Location::new(0, 1)]);
        assert_eq!(
            events,
            vec![
                MazeEvent::Segment {
                    source: Location::new(0, 0),
                    target: Location::new(1, 0),
                    backtrack: false
                },
                MazeEvent::Segment {
                    source: Location::new(0, 0),
                    target: Location::new(1, 0),
                    backtrack: true
                },
                MazeEvent::Segment {
                    source: Location::new(0, 0),
                    target: Location::new(0, 1),
                    backtrack: false
                },
            ]
        );
    }

    #[test]
    fn test_disconnected_goal_fails() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.hide_wall(Location::new(0, 0), Side::Right).unwrap();
        grid.hide_wall(Location::new(1, 0), Side::Bottom).unwrap();
        let mut events = Vec::new();
        let found = solve_dfs(&mut grid, Location::new(0, 0), Location::new(2, 2), &mut events)
            .unwrap();
        assert_eq!(found, None);
        // Every drawn segment was undone again
        let drawn = events
            .iter()
            .filter(|e| matches!(e, MazeEvent::Segment { backtrack: false, .. }))
            .count();
        assert_eq!(drawn, 2);
        assert_eq!(events.len(), 4);
    }

    #[test]
    fn test_start_is_goal() {
        let mut grid = Grid::new(1, 1).unwrap();
        let mut events = Vec::new();
        let cell = Location::new(0, 0);
        let path = solve_dfs(&mut grid, cell, cell, &mut events).unwrap();
        assert_eq!(path, Some(vec![cell]));
        assert!(events.is_empty());
    }

    #[test]
    fn test_closed_walls_are_not_crossed() {
        let mut grid = Grid::new(2, 1).unwrap();
        let mut events = Vec::new();
        let found = solve_dfs(&mut grid, Location::new(0, 0), Location::new(1, 0), &mut events)
            .unwrap();
        assert_eq!(found, None);
        assert!(events.is_empty());
    }
}

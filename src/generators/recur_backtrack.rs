use rand::Rng;

use crate::{
    error::Result,
    maze::{Location, Maze, Side, StepObserver},
};

/// Neighbour enumeration order. Fixed so a seed always yields the same maze.
const CARVE_ORDER: [Side; 4] = [Side::Left, Side::Right, Side::Top, Side::Bottom];

/// Carves a perfect maze with a randomized depth-first backtracker, opening the
/// entrance on top of the first cell and the exit below the last one.
pub fn recursive_backtrack<O: StepObserver>(maze: &mut Maze, observer: &mut O) -> Result<()> {
    let entrance = maze.entrance();
    let exit = maze.exit();
    let Maze { grid, rng, .. } = maze;

    grid.set_visited(entrance)?;
    grid.hide_wall(entrance, Side::Top)?;
    observer.on_wall_opened(entrance, Side::Top)?;

    // The stack holds the current branch; its top is the cell being extended
    let mut stack: Vec<Location> = vec![entrance];

    while let Some(&cell) = stack.last() {
        let candidates = CARVE_ORDER
            .into_iter()
            .filter_map(|side| grid.neighbor(cell, side).map(|n| (side, n)))
            .filter(|&(_, n)| !grid.is_visited(n))
            .collect::<Vec<_>>();

        if candidates.is_empty() {
            // Dead end, fall back to the cell we came from
            stack.pop();
            continue;
        }

        let (side, neighbor) = candidates[rng.random_range(0..candidates.len())];
        tracing::trace!("[generate] {:?} -> {:?} via {:?}", cell, neighbor, side);
        grid.hide_wall(cell, side)?;
        observer.on_wall_opened(cell, side)?;
        grid.set_visited(neighbor)?;
        stack.push(neighbor);
    }

    grid.hide_wall(exit, Side::Bottom)?;
    observer.on_wall_opened(exit, Side::Bottom)?;
    Ok(())
}

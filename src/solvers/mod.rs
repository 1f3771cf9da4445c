mod dfs;

use crate::{
    error::Result,
    maze::{Location, Maze, StepObserver},
};

pub use dfs::solve_dfs;

/// Finds the path from the entrance to the exit of a carved maze.
/// Visited marks from carving are cleared first; walls are left untouched.
pub fn solve_maze<O: StepObserver>(
    maze: &mut Maze,
    observer: &mut O,
) -> Result<Option<Vec<Location>>> {
    let start = maze.entrance();
    let goal = maze.exit();
    maze.reset_visited();
    tracing::debug!("[solve] searching {:?} -> {:?}", start, goal);
    solve_dfs(&mut maze.grid, start, goal, observer)
}

mod recur_backtrack;

use crate::{
    error::Result,
    maze::{Maze, StepObserver},
};

pub use recur_backtrack::recursive_backtrack;

/// Carves `maze` in place, reporting every opened wall to `observer`.
pub fn generate_maze<O: StepObserver>(maze: &mut Maze, observer: &mut O) -> Result<()> {
    tracing::debug!(
        "[generate] carving {}x{} maze with seed {}",
        maze.grid().col_count(),
        maze.grid().row_count(),
        maze.config().seed
    );
    recursive_backtrack(maze, observer)
}

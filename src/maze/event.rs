use super::cell::{Location, Side};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Generating,
    Solving,
}

/// Visual events produced while a maze is built and solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeEvent {
    /// A fresh grid with every wall standing.
    Initial {
        col_count: u16,
        row_count: u16,
        cell_size: u16,
    },
    PhaseStarted(Phase),
    WallOpened {
        location: Location,
        side: Side,
    },
    /// Path drawn from `source` to `target`, or undone when `backtrack` is set.
    Segment {
        source: Location,
        target: Location,
        backtrack: bool,
    },
    Finished {
        solved: bool,
        path_len: usize,
    },
}

/// Receives each visible step of the algorithms, in the order they happen.
/// Returning an error aborts the running phase.
pub trait StepObserver {
    fn on_wall_opened(&mut self, location: Location, side: Side) -> Result<()>;

    fn on_segment(&mut self, source: Location, target: Location, backtrack: bool) -> Result<()>;
}

/// Records steps as events.
impl StepObserver for Vec<MazeEvent> {
    fn on_wall_opened(&mut self, location: Location, side: Side) -> Result<()> {
        self.push(MazeEvent::WallOpened { location, side });
        Ok(())
    }

    fn on_segment(&mut self, source: Location, target: Location, backtrack: bool) -> Result<()> {
        self.push(MazeEvent::Segment {
            source,
            target,
            backtrack,
        });
        Ok(())
    }
}

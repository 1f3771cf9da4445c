use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
        mpsc::SyncSender,
    },
    thread::JoinHandle,
    time::Duration,
};

use crate::{
    error::{MazeError, Result},
    generators::generate_maze,
    maze::{Location, Maze, MazeConfig, MazeEvent, Phase, Side, StepObserver},
    solvers::solve_maze,
};

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub walls_opened: usize,
    pub segments: usize,
    pub path: Option<Vec<Location>>,
}

impl RunSummary {
    pub fn solved(&self) -> bool {
        self.path.is_some()
    }
}

/// Forwards steps to the event channel, pausing between them and checking for
/// cancellation around every pause.
struct Pacer<'a> {
    events: &'a SyncSender<MazeEvent>,
    cancel: &'a AtomicBool,
    step_delay: Duration,
    walls_opened: usize,
    segments: usize,
}

impl Pacer<'_> {
    fn check_cancel(&self) -> Result<()> {
        if self.cancel.load(Ordering::Relaxed) {
            Err(MazeError::Cancelled)
        } else {
            Ok(())
        }
    }

    fn emit(&mut self, event: MazeEvent) -> Result<()> {
        self.check_cancel()?;
        if self.events.send(event).is_err() {
            // Nobody is watching anymore
            tracing::debug!("[animation] event receiver dropped");
            return Err(MazeError::Cancelled);
        }
        if !self.step_delay.is_zero() {
            std::thread::sleep(self.step_delay);
            self.check_cancel()?;
        }
        Ok(())
    }
}

impl StepObserver for Pacer<'_> {
    fn on_wall_opened(&mut self, location: Location, side: Side) -> Result<()> {
        self.walls_opened += 1;
        self.emit(MazeEvent::WallOpened { location, side })
    }

    fn on_segment(&mut self, source: Location, target: Location, backtrack: bool) -> Result<()> {
        self.segments += 1;
        self.emit(MazeEvent::Segment {
            source,
            target,
            backtrack,
        })
    }
}

/// Runs generation then solving of one maze, as a paced stream of events.
pub struct AnimationDriver {
    config: MazeConfig,
    cancel: Arc<AtomicBool>,
}

impl AnimationDriver {
    pub fn new(config: MazeConfig, cancel: Arc<AtomicBool>) -> Self {
        Self { config, cancel }
    }

    /// Runs the full demonstration: announce the grid, carve it, clear visited
    /// marks, solve it, then report `Finished`. Solving never starts before
    /// carving has finished. The sender is dropped on return, which tells the
    /// receiver the stream is over.
    pub fn run(self, events: SyncSender<MazeEvent>) -> Result<RunSummary> {
        let mut maze = Maze::new(self.config.clone())?;
        tracing::info!(
            "[animation] starting {}x{} run, seed {}, step delay {:?}",
            self.config.col_count,
            self.config.row_count,
            self.config.seed,
            self.config.step_delay
        );

        let mut pacer = Pacer {
            events: &events,
            cancel: &self.cancel,
            step_delay: self.config.step_delay,
            walls_opened: 0,
            segments: 0,
        };

        let result = Self::phases(&mut maze, &mut pacer);
        match &result {
            Ok(summary) => tracing::info!(
                "[animation] finished: solved={}, {} walls opened, {} segments",
                summary.solved(),
                summary.walls_opened,
                summary.segments
            ),
            Err(MazeError::Cancelled) => tracing::info!("[animation] cancelled"),
            Err(e) => tracing::error!("[animation] aborted: {}", e),
        }
        result
    }

    fn phases(maze: &mut Maze, pacer: &mut Pacer<'_>) -> Result<RunSummary> {
        pacer.emit(MazeEvent::Initial {
            col_count: maze.grid().col_count(),
            row_count: maze.grid().row_count(),
            cell_size: maze.config().cell_size,
        })?;

        pacer.emit(MazeEvent::PhaseStarted(Phase::Generating))?;
        generate_maze(maze, pacer)?;

        pacer.emit(MazeEvent::PhaseStarted(Phase::Solving))?;
        let path = solve_maze(maze, pacer)?;

        pacer.emit(MazeEvent::Finished {
            solved: path.is_some(),
            path_len: path.as_ref().map_or(0, Vec::len),
        })?;

        Ok(RunSummary {
            walls_opened: pacer.walls_opened,
            segments: pacer.segments,
            path,
        })
    }

    /// Runs [`AnimationDriver::run`] on its own thread.
    pub fn spawn(self, events: SyncSender<MazeEvent>) -> JoinHandle<Result<RunSummary>> {
        std::thread::spawn(move || self.run(events))
    }
}

//! Perfect maze carving and depth-first solving, replayed step by step.

pub mod animation;
pub mod app;
pub mod error;
pub mod generators;
pub mod maze;
pub mod solvers;

pub use animation::{AnimationDriver, RunSummary};
pub use error::MazeError;
pub use maze::{Grid, Location, Maze, MazeConfig, MazeEvent, Phase, Seed, Side, StepObserver};

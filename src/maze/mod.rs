pub mod cell;
pub mod event;
pub mod grid;

use std::time::Duration;

use rand::{SeedableRng, rngs::StdRng};

pub use cell::{Cell, Location, Side};
pub use event::{MazeEvent, Phase, StepObserver};
pub use grid::Grid;

use crate::error::Result;

/// Two 64-bit words fully determining the generator's random choices.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seed(pub u64, pub u64);

impl Seed {
    /// A seed drawn from the thread-local generator, for runs that don't care.
    pub fn random() -> Self {
        use rand::Rng;
        let mut rng = rand::rng();
        Seed(rng.random(), rng.random())
    }

    /// The words go little-endian into the first 16 bytes; the rest stay zero.
    pub fn rng(self) -> StdRng {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&self.0.to_le_bytes());
        bytes[8..16].copy_from_slice(&self.1.to_le_bytes());
        StdRng::from_seed(bytes)
    }
}

impl std::fmt::Display for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.0, self.1)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MazeConfig {
    pub col_count: u16,
    pub row_count: u16,
    /// Rendering hint only; the algorithms ignore it.
    pub cell_size: u16,
    pub seed: Seed,
    /// Pause after each visible step. Zero runs without suspending.
    pub step_delay: Duration,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            col_count: 40,
            row_count: 20,
            cell_size: 2,
            seed: Seed::default(),
            step_delay: Duration::from_millis(20),
        }
    }
}

/// A grid together with the random source that carves it.
pub struct Maze {
    pub(crate) grid: Grid,
    pub(crate) rng: StdRng,
    config: MazeConfig,
}

impl Maze {
    pub fn new(config: MazeConfig) -> Result<Self> {
        Ok(Maze {
            grid: Grid::new(config.col_count, config.row_count)?,
            rng: config.seed.rng(),
            config,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    pub fn entrance(&self) -> Location {
        Location::new(0, 0)
    }

    pub fn exit(&self) -> Location {
        Location::new(
            self.grid.col_count() as i32 - 1,
            self.grid.row_count() as i32 - 1,
        )
    }

    /// Clears visited marks left by a previous pass.
    pub fn reset_visited(&mut self) {
        self.grid.reset_visited();
    }
}

use std::{path::PathBuf, time::Duration};

use clap::Parser;

use crate::maze::{MazeConfig, Seed};

#[derive(Debug, Parser)]
#[command(version, about = "Watch a perfect maze get carved and solved in the terminal")]
pub struct Args {
    /// Maze width in cells
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u16).range(1..))]
    pub width: u16,

    /// Maze height in cells
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u16).range(1..))]
    pub height: u16,

    /// Cell size hint for the renderer
    #[arg(long, default_value_t = 2)]
    pub cell_size: u16,

    /// Two 64-bit words seeding the generator. Random when omitted.
    #[arg(long, num_args = 2, value_names = ["HI", "LO"])]
    pub seed: Option<Vec<u64>>,

    /// Pause after each animation step, in milliseconds
    #[arg(long, default_value_t = 20)]
    pub delay_ms: u64,

    /// Run without a terminal UI and print a summary
    #[arg(long)]
    pub headless: bool,

    /// File receiving the log output. Defaults to `mazetrace.log` for the
    /// terminal UI; headless runs only log when this is given.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Most verbose level written to the log file
    #[arg(long, default_value_t = tracing::Level::INFO)]
    pub log_level: tracing::Level,
}

impl Args {
    pub fn seed(&self) -> Seed {
        match self.seed.as_deref() {
            Some(&[hi, lo]) => Seed(hi, lo),
            _ => Seed::random(),
        }
    }

    /// Where to write logs, if anywhere.
    pub fn log_path(&self) -> Option<PathBuf> {
        match &self.log_file {
            Some(path) => Some(path.clone()),
            None if self.headless => None,
            None => Some(PathBuf::from("mazetrace.log")),
        }
    }

    pub fn maze_config(&self) -> MazeConfig {
        MazeConfig {
            col_count: self.width,
            row_count: self.height,
            cell_size: self.cell_size,
            seed: self.seed(),
            step_delay: Duration::from_millis(self.delay_ms),
        }
    }
}

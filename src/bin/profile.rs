use std::time::Duration;

use mazetrace::{MazeConfig, Seed, app::App};

fn main() -> std::io::Result<()> {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args.next().and_then(|s| s.parse::<u64>().ok()).unwrap_or(1);

    for i in 0..num_iters {
        let config = MazeConfig {
            col_count: u8::MAX as u16,
            row_count: u8::MAX as u16,
            seed: Seed(i, 0),
            step_delay: Duration::ZERO,
            ..MazeConfig::default()
        };
        App::run_headless(config).map_err(std::io::Error::other)?;
    }
    Ok(())
}

use clap::Parser;
use mazetrace::app::{App, cli::Args, logging};

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    let _log_guard = match args.log_path() {
        Some(path) => Some(logging::init(&path, args.log_level)?),
        None => None,
    };
    let config = args.maze_config();
    // Logged so a random run can be replayed with --seed
    tracing::info!("Using seed {}", config.seed);

    if args.headless {
        let summary = App::run_headless(config.clone()).map_err(std::io::Error::other)?;
        println!(
            "{}x{} maze, seed {}: {} walls opened, {} path segments, {}",
            config.col_count,
            config.row_count,
            config.seed,
            summary.walls_opened,
            summary.segments,
            match &summary.path {
                Some(path) => format!("path of {} cells", path.len()),
                None => "no path".to_string(),
            }
        );
        return Ok(());
    }

    let mut stdout = std::io::stdout();
    App::setup_terminal(&mut stdout)?;
    let result = App::default().run(&mut stdout, config);
    App::restore_terminal(&mut stdout)?;
    result
}

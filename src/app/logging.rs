use std::path::Path;

use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};

/// Sends tracing output to `path`, since the terminal belongs to the renderer.
/// Keep the returned guard alive until exit so buffered lines get flushed.
/// Fails when the log file cannot be created.
pub fn init(path: &Path, level: tracing::Level) -> std::io::Result<WorkerGuard> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .map_or_else(|| "mazetrace.log".into(), |name| name.to_string_lossy().into_owned());

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
        .map_err(std::io::Error::other)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let initialized = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(level)
        .try_init();
    if let Err(e) = initialized {
        eprintln!("Logging disabled: {}", e);
    }
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(target_os = "linux")]
    #[test]
    fn test_unwritable_log_path_is_an_error() {
        let result = init(Path::new("/proc/nonexistent_dir/x.log"), tracing::Level::INFO);
        assert!(result.is_err());
    }
}

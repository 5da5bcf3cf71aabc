use std::{io, path::Path};

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

/// Install the global subscriber.
///
/// With a `log_file` the logs go through a non-blocking file writer and the
/// returned guard must be held until exit so buffered lines get flushed.
/// Otherwise logs go to stderr and no guard is returned.
pub fn init(log_file: Option<&Path>, level: Level) -> io::Result<Option<WorkerGuard>> {
    match log_file {
        Some(path) => {
            let file_name = path.file_name().ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("log file path {} has no file name", path.display()),
                )
            })?;
            let directory = path
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(directory, file_name));
            tracing_subscriber::fmt()
                .with_writer(writer)
                .with_ansi(false)
                .with_max_level(level)
                .try_init()
                .map_err(io::Error::other)?;
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_writer(io::stderr)
                .with_max_level(level)
                .try_init()
                .map_err(io::Error::other)?;
            Ok(None)
        }
    }
}

//! Log sink construction.
//!
//! Builds a [`Dispatch`] that writes to a log file and, unless quiet, to
//! stderr. The caller scopes it with [`tracing::dispatcher::with_default`]; no
//! global subscriber is installed.

use std::path::Path;

use tracing::Dispatch;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;

/// A dispatch plus the guard that keeps its file writer alive.
pub struct Logging {
    pub dispatch: Dispatch,
    /// Flushes the file writer on drop. `None` when the file could not be opened.
    _guard: Option<WorkerGuard>,
}

/// Setup logging to the log file and stderr.
///
/// A log file that cannot be opened is reported on stderr and logging falls
/// back to the console only.
pub fn setup_logging(log_file: &Path, quiet: bool) -> Logging {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    let (file_layer, guard) = match file_appender(log_file) {
        Ok(appender) => {
            let (non_blocking_file, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        Err(error) => {
            eprintln!(
                "cannot open log file {}: {error}; logging to console only",
                log_file.display()
            );
            (None, None)
        }
    };

    // Keep at least one destination
    let console_layer = (!quiet || file_layer.is_none())
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer);

    Logging {
        dispatch: Dispatch::new(subscriber),
        _guard: guard,
    }
}

fn file_appender(
    log_file: &Path,
) -> Result<RollingFileAppender, tracing_appender::rolling::InitError> {
    let directory = match log_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = log_file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| crate::config::DEFAULT_LOG_FILE.to_string());

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(directory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_reach_the_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.log");

        {
            let logging = setup_logging(&path, true);
            tracing::dispatcher::with_default(&logging.dispatch, || {
                tracing::info!(scenario = "level=0", "scenario finished");
            });
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("scenario finished"));
        assert!(contents.contains("level=0"));
    }

    #[test]
    fn unopenable_log_file_falls_back_to_console() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened as a log file
        let logging = setup_logging(dir.path(), true);
        assert!(logging._guard.is_none());
    }
}

use std::path::{Path, PathBuf};

use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILE: &str = "github-fake.log";

/// Installs the global subscriber.
///
/// Only `github_fake` events pass the default filter: `warn` and up, or
/// `debug` and up with `verbose`. `RUST_LOG` replaces the filter entirely.
/// With `log_file`, events are also written as JSON lines to a file rolled
/// daily next to it.
pub fn init(verbose: bool, log_file: Option<PathBuf>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .with(log_file.as_deref().map(|path| {
            fmt::layer()
                .with_writer(daily_appender(path))
                .with_ansi(false)
                .json()
        }))
        .init();
}

fn filter_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "warn" };
    format!("github_fake={}", level)
}

fn daily_appender(path: &Path) -> RollingFileAppender {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if let Err(e) = std::fs::create_dir_all(dir) {
        eprintln!("could not create log directory {}: {}", dir.display(), e);
    }

    let file_name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.into());

    tracing_appender::rolling::daily(dir, file_name)
}

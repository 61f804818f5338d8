use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Overrides the log directory, e.g. for CI runs without a home directory.
pub const LOG_DIR_ENV: &str = "DOCGEN_LOG_DIR";

/// Filter used when `RUST_LOG` is unset: generation progress from the docgen
/// crates, warnings from everything else.
pub const DEFAULT_DIRECTIVES: &str =
    "warn,docgen=info,docgen_cli=info,docgen_core=info,docgen_json=info,docgen_runtime=info";

/// Directory receiving the rolling log files: `$DOCGEN_LOG_DIR`, else `~/.docgen/logs`.
pub fn log_dir() -> PathBuf {
    resolve_log_dir(
        std::env::var_os(LOG_DIR_ENV).map(PathBuf::from),
        dirs::home_dir(),
    )
}

fn resolve_log_dir(explicit: Option<PathBuf>, home: Option<PathBuf>) -> PathBuf {
    match explicit.filter(|dir| !dir.as_os_str().is_empty()) {
        Some(dir) => dir,
        None => home
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".docgen")
            .join("logs"),
    }
}

fn file_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Terminal output only carries warnings (skipped renderers, unreadable
/// icons) unless `RUST_LOG` asks for more.
fn stderr_level(rust_log_set: bool) -> LevelFilter {
    if rust_log_set {
        LevelFilter::TRACE
    } else {
        LevelFilter::WARN
    }
}

/// Installs the global subscriber. Keep the guard alive until exit so
/// buffered lines are flushed. A second call leaves the first subscriber in place.
pub fn init_logging(component: &str, to_stderr: bool) -> WorkerGuard {
    let log_dir = log_dir();
    let _ = std::fs::create_dir_all(&log_dir);

    // Files like generate.log.2026-10-19
    let file_appender = tracing_appender::rolling::daily(&log_dir, component);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    let registry = tracing_subscriber::registry()
        .with(file_filter())
        .with(file_layer);

    let installed = if to_stderr {
        let rust_log_set = std::env::var_os(EnvFilter::DEFAULT_ENV).is_some();
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false)
            .with_filter(stderr_level(rust_log_set));
        registry.with(stderr_layer).try_init().is_ok()
    } else {
        registry.try_init().is_ok()
    };

    if installed {
        tracing::debug!("Logging {} to {}", component, log_dir.display());
    }
    guard
}

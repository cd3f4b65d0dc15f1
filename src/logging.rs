use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "info,calboard=debug";

/// Start logging to a file in `log_dir`.  The terminal belongs to the UI, so
/// nothing is logged when no directory is configured.
///
/// The returned guard must be kept alive until the program exits so that
/// buffered log lines get flushed.
pub(crate) fn init(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let log_dir = log_dir?;
    let file_appender = tracing_appender::rolling::daily(log_dir, "calboard.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let r = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking),
        )
        .try_init();
    if r.is_err() {
        // A subscriber is already installed
        return None;
    }
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "logging started");
    Some(guard)
}

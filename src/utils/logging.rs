use std::path::Path;

use tracing_appender::rolling::Rotation;
use tracing_subscriber::EnvFilter;

use crate::errors::{AppError, AppResult};

pub const LOG_PREFIX: &str = "rpomodoro";

/// Route `tracing` output to a daily rolling file under `log_dir`. Nothing
/// goes to stdout/stderr, which belong to the menu and the timer screen.
///
/// Level precedence: `level` argument, then `RUST_LOG`, then `info`.
pub fn enable_logging(log_dir: &Path, level: Option<&str>) -> AppResult<()> {
    std::fs::create_dir_all(log_dir)?;

    let appender = tracing_appender::rolling::Builder::new()
        .rotation(Rotation::DAILY)
        .max_log_files(5)
        .filename_prefix(LOG_PREFIX)
        .filename_suffix("log")
        .build(log_dir)
        .map_err(|e| AppError::Other(format!("log appender: {e}")))?;

    let crate_target = env!("CARGO_PKG_NAME").replace('-', "_");
    let filter = log_filter(&crate_target, level);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(appender)
        .try_init()
        .map_err(|e| AppError::Other(format!("logging already initialised: {e}")))?;

    Ok(())
}

/// An explicit level applies to this crate only. Without one, `RUST_LOG` is
/// used as a full filter directive, falling back to `info` for this crate.
pub fn log_filter(crate_target: &str, level: Option<&str>) -> EnvFilter {
    match level {
        Some(level) => EnvFilter::new(format!("{crate_target}={level}")),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("{crate_target}=info"))),
    }
}

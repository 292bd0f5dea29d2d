//! `tracing` subscriber setup for the command line

use std::path::Path;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{LOG_ENV, LogConfig};

/// Install the global subscriber
///
/// Logs go to stderr, or to `log_file` when given. `PIP_DEV_LOG` overrides the
/// configured level. The returned guard must be held until exit so buffered
/// file logs are flushed.
pub fn init(
    config: &LogConfig,
    log_file: Option<&Path>,
) -> anyhow::Result<Option<WorkerGuard>> {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level));
    let registry = tracing_subscriber::registry().with(filter);

    let Some(path) = log_file else {
        let layer = fmt::layer().with_writer(std::io::stderr);
        if config.json {
            registry.with(layer.json()).try_init()?;
        } else {
            registry.with(layer).try_init()?;
        }
        return Ok(None);
    };

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("Log path {} has no file name", path.display()))?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let layer = fmt::layer().with_writer(writer).with_ansi(false);
    if config.json {
        registry.with(layer.json()).try_init()?;
    } else {
        registry.with(layer).try_init()?;
    }
    Ok(Some(guard))
}

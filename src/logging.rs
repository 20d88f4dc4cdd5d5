//! File logging
//!
//! Stdout carries command output, so diagnostics go to a daily rolling JSON
//! log under [`crate::config::log_dir`].

use std::path::Path;

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::{LOG_ENV_VAR, log_dir};

const LOG_FILE_PREFIX: &str = "docs-lang-switch.log";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to create log directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to install subscriber: {0}")]
    Subscriber(String),
}

/// Install the global subscriber writing to the default log directory.
///
/// `default_level` applies unless `DOCS_LANG_SWITCH_LOG` holds a filter.
/// Keep the returned guard alive until exit or buffered lines are lost.
pub fn init(default_level: &str) -> Result<WorkerGuard, LoggingError> {
    init_in(&log_dir(), default_level)
}

pub fn init_in(dir: &Path, default_level: &str) -> Result<WorkerGuard, LoggingError> {
    std::fs::create_dir_all(dir)?;

    let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(env_filter(default_level))
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| LoggingError::Subscriber(e.to_string()))?;

    Ok(guard)
}

fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_level))
}

//! Logging bootstrap for the command line tool.
//!
//! The library only emits records through the `log` facade. The binary
//! starts a `flexi_logger` backend once, writing to stderr and optionally
//! to a rotated file.

use anyhow::{Context, Result};
use flexi_logger::{Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming};
use std::path::Path;

/// Environment variable that overrides the verbosity derived level.
pub const LOG_ENV: &str = "MDPOST_LOG";

const LOG_FILE_BASENAME: &str = "mdpost";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;

/// Maps `-v` occurrences to a log level.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Starts the logger.
///
/// The log specification comes from [`LOG_ENV`] when set, otherwise from
/// `verbosity`. With `log_dir`, records also go to rotated files in that
/// directory and only warnings and errors are duplicated to stderr.
///
/// The returned handle must stay alive for as long as logging is needed.
///
/// # Errors
///
/// Returns error if the specification is invalid, the log directory cannot
/// be created, or the backend fails to start.
pub fn init_logging(verbosity: u8, log_dir: Option<&Path>) -> Result<LoggerHandle> {
    let spec = std::env::var(LOG_ENV)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| level_for_verbosity(verbosity).to_string());

    let logger = Logger::try_with_str(&spec)
        .with_context(|| format!("Invalid log specification: {}", spec))?;

    let logger = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
            logger
                .log_to_file(
                    FileSpec::default()
                        .directory(dir)
                        .basename(LOG_FILE_BASENAME),
                )
                .rotate(
                    Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                    Naming::Numbers,
                    Cleanup::KeepLogFiles(MAX_LOG_FILES),
                )
                .append()
                .format_for_files(flexi_logger::detailed_format)
                .duplicate_to_stderr(Duplicate::Warn)
        }
        None => logger.log_to_stderr(),
    };

    logger
        .format_for_stderr(flexi_logger::default_format)
        .start()
        .context("Failed to start logger")
}

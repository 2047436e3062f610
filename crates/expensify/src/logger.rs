//! File-based logging using simplelog
//!
//! Log file location depends on build type:
//! - Debug builds: current working directory (for development convenience)
//! - Release builds: cache directory (~/.cache/expensify/ on Linux)
//!
//! Standard output belongs to command results, so nothing is logged there.

use anyhow::{Context, Result};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

/// Get the log file path based on build type
fn log_file_path() -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let filename = format!("debug-{}.log", timestamp);

    if cfg!(debug_assertions) {
        PathBuf::from(filename)
    } else {
        expensify_config::cache_dir()
            .map(|dir| dir.join(&filename))
            .unwrap_or_else(|_| PathBuf::from(filename))
    }
}

/// Map a `RUST_LOG`-style value to a level, defaulting to info
fn parse_level(value: &str) -> LevelFilter {
    match value.trim().to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

/// Initialize file-based logging
///
/// Creates a log file with timestamp; level comes from `RUST_LOG`
/// (debug when unset). Returns the path of the log file.
pub fn init() -> Result<PathBuf> {
    let log_file = log_file_path();

    let level = std::env::var("RUST_LOG")
        .map(|v| parse_level(&v))
        .unwrap_or(LevelFilter::Debug);

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        .unwrap_or_else(|c| c) // Fallback if local time offset fails
        .build();

    let file = File::create(&log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    WriteLogger::init(level, config, file).context("Failed to initialize logger")?;

    Ok(log_file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("TRACE"), LevelFilter::Trace);
        assert_eq!(parse_level(" warn "), LevelFilter::Warn);
        assert_eq!(parse_level("off"), LevelFilter::Off);
        assert_eq!(parse_level("expensify=debug"), LevelFilter::Info);
    }

    #[test]
    fn test_log_file_name_is_timestamped() {
        let path = log_file_path();
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("debug-"));
        assert!(name.ends_with(".log"));
    }
}

//! Logging Module
//!
//! Unified logging setup based on the tracing framework:
//! - Log files in the system temp directory (daily rotation)
//! - Cleanup of old log files beyond a configured count
//! - Structured records for external tool invocations
//!
//! # Examples
//!
//! ```no_run
//! use shared_utils::logging::{LogConfig, init_logging};
//! use tracing::{info, error};
//!
//! let config = LogConfig::default();
//! init_logging("my_program", config).expect("Failed to initialize logging");
//!
//! info!("Program started");
//! error!(error = "something went wrong", "Operation failed");
//! ```

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Directory for log files (defaults to the system temp directory)
    pub log_dir: PathBuf,
    /// Number of rotated log files to keep, default 5
    pub max_files: usize,
    /// Log level, default Info
    pub level: Level,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: std::env::temp_dir(),
            max_files: 5,
            level: Level::INFO,
        }
    }
}

impl LogConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_log_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.log_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn with_max_files(mut self, count: usize) -> Self {
        self.max_files = count;
        self
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }
}

/// Initialize the logging system.
///
/// Sets up tracing-subscriber with a daily-rolling file appender named
/// `{program_name}.log` in the configured directory, plus an ANSI stderr
/// layer. The filter comes from the environment when set, otherwise
/// `{program_name}={level}`.
pub fn init_logging(program_name: &str, config: LogConfig) -> Result<()> {
    std::fs::create_dir_all(&config.log_dir)
        .with_context(|| format!("Failed to create log directory: {:?}", config.log_dir))?;

    let log_file_name = format!("{}.log", program_name);
    let file_appender = RollingFileAppender::new(Rotation::DAILY, &config.log_dir, &log_file_name);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", program_name, config.level)));

    // No ANSI codes in the file layer
    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true);

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    tracing::info!(
        program = program_name,
        log_dir = ?config.log_dir,
        log_file = log_file_name,
        max_files = config.max_files,
        level = ?config.level,
        "Logging system initialized"
    );

    cleanup_old_logs(&config.log_dir, program_name, config.max_files)?;

    Ok(())
}

/// Remove old log files, keeping only the most recent `max_files`.
fn cleanup_old_logs(log_dir: &Path, program_name: &str, max_files: usize) -> Result<()> {
    use std::fs;

    let entries = fs::read_dir(log_dir)
        .with_context(|| format!("Failed to read log directory: {:?}", log_dir))?;

    let mut log_files: Vec<(PathBuf, std::time::SystemTime)> = Vec::new();

    for entry in entries {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        if let Some(file_name) = path.file_name() {
            let file_name_str = file_name.to_string_lossy();
            if file_name_str.starts_with(program_name) && file_name_str.contains(".log") {
                if let Ok(metadata) = fs::metadata(&path) {
                    if let Ok(modified) = metadata.modified() {
                        log_files.push((path, modified));
                    }
                }
            }
        }
    }

    if log_files.len() > max_files {
        // Newest first
        log_files.sort_by(|a, b| b.1.cmp(&a.1));

        for (path, _) in log_files.iter().skip(max_files) {
            if let Err(e) = fs::remove_file(path) {
                tracing::warn!(
                    path = ?path,
                    error = %e,
                    "Failed to remove old log file"
                );
            } else {
                tracing::debug!(
                    path = ?path,
                    "Removed old log file"
                );
            }
        }
    }

    Ok(())
}

/// Record an external tool invocation.
///
/// Logs tool name, full command line, duration and exit status. Captured
/// output goes to the debug level on success and the error level on failure.
///
/// # Examples
///
/// ```no_run
/// use shared_utils::logging::log_external_tool;
/// use std::time::Duration;
///
/// log_external_tool(
///     "ffmpeg",
///     &["-i", "input.ts", "output.mp4"],
///     "ffmpeg output...",
///     Some(0),
///     Duration::from_secs(10),
/// );
/// ```
pub fn log_external_tool(
    tool_name: &str,
    args: &[&str],
    output: &str,
    exit_code: Option<i32>,
    duration: std::time::Duration,
) {
    let command = format!("{} {}", tool_name, args.join(" "));

    match exit_code {
        Some(0) => {
            tracing::info!(
                tool = tool_name,
                command = %command,
                duration_secs = duration.as_secs_f64(),
                exit_code = 0,
                "External tool completed successfully"
            );
            tracing::debug!(
                tool = tool_name,
                output = %output,
                "External tool output"
            );
        }
        Some(code) => {
            tracing::error!(
                tool = tool_name,
                command = %command,
                duration_secs = duration.as_secs_f64(),
                exit_code = code,
                output = %output,
                "External tool failed"
            );
        }
        None => {
            tracing::error!(
                tool = tool_name,
                command = %command,
                duration_secs = duration.as_secs_f64(),
                output = %output,
                "External tool terminated without exit code"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_log_config_default() {
        let config = LogConfig::default();
        assert_eq!(config.max_files, 5);
        assert_eq!(config.level, Level::INFO);
        assert_eq!(config.log_dir, std::env::temp_dir());
    }

    #[test]
    fn test_log_config_builder() {
        let config = LogConfig::new()
            .with_log_dir("/tmp/test_logs")
            .with_max_files(3)
            .with_level(Level::DEBUG);

        assert_eq!(config.log_dir, PathBuf::from("/tmp/test_logs"));
        assert_eq!(config.max_files, 3);
        assert_eq!(config.level, Level::DEBUG);
    }

    #[test]
    fn test_cleanup_old_logs_keeps_newest() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path();

        for i in 0..4 {
            let path = dir.join(format!("prog.log.2026-01-0{}", i + 1));
            std::fs::write(&path, "log").unwrap();
            // Distinct mtimes so the sort order is deterministic
            std::thread::sleep(Duration::from_millis(20));
        }

        cleanup_old_logs(dir, "prog", 2).unwrap();

        let remaining: Vec<_> = std::fs::read_dir(dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();

        assert_eq!(remaining.len(), 2);
        assert!(remaining.contains(&"prog.log.2026-01-03".to_string()));
        assert!(remaining.contains(&"prog.log.2026-01-04".to_string()));
    }

    #[test]
    fn test_cleanup_ignores_unrelated_files() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path();

        std::fs::write(dir.join("other.txt"), "x").unwrap();
        std::fs::write(dir.join("prog.log"), "x").unwrap();

        cleanup_old_logs(dir, "prog", 1).unwrap();

        assert!(dir.join("other.txt").exists());
        assert!(dir.join("prog.log").exists());
    }

    #[test]
    fn test_log_external_tool_no_panic() {
        log_external_tool(
            "ffprobe",
            &["-v", "error", "file.ts"],
            "output",
            Some(0),
            Duration::from_millis(50),
        );
        log_external_tool("ffmpeg", &["-i", "a.ts"], "stderr text", Some(1), Duration::ZERO);
        log_external_tool("ffmpeg", &[], "", None, Duration::ZERO);
    }
}

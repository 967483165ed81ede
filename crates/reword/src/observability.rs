//! Logging setup: a human-readable stderr layer plus an optional JSONL file.
//!
//! `RUST_LOG` wins when set. Otherwise `-q`/`-v` pick the stderr level and
//! the configured `log_level` picks what reaches the log file.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Explicit log file path.
pub const LOG_PATH_ENV: &str = "REWORD_LOG_PATH";
/// Directory for `reword.jsonl`.
pub const LOG_DIR_ENV: &str = "REWORD_LOG_DIR";

const LOG_FILE_NAME: &str = "reword.jsonl";

/// Where logs go.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// JSONL log file, if file logging is on.
    pub log_file: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Resolve the log file from the environment, falling back to `log_dir`
    /// from the configuration.
    pub fn from_env_with_overrides(log_dir: Option<PathBuf>) -> Self {
        Self::resolve(env_path(LOG_PATH_ENV), env_path(LOG_DIR_ENV), log_dir)
    }

    fn resolve(
        path: Option<PathBuf>,
        env_dir: Option<PathBuf>,
        config_dir: Option<PathBuf>,
    ) -> Self {
        let log_file = path.or_else(|| env_dir.or(config_dir).map(|dir| dir.join(LOG_FILE_NAME)));
        Self { log_file }
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Global filter: `RUST_LOG`, or the configured level raised by `-v`.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => default_level,
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    // Keep HTTP internals out of debug output
    EnvFilter::new(format!("{level},hyper=warn,reqwest=warn"))
}

/// Level shown on stderr.
pub fn stderr_level(quiet: bool, verbose: u8) -> LevelFilter {
    if std::env::var_os("RUST_LOG").is_some() {
        return LevelFilter::TRACE;
    }
    match (quiet, verbose) {
        (true, _) => LevelFilter::ERROR,
        (false, 0) => LevelFilter::WARN,
        (false, 1) => LevelFilter::DEBUG,
        (false, _) => LevelFilter::TRACE,
    }
}

/// Install the global subscriber.
///
/// Returns the file writer's guard; keep it alive until exit so buffered
/// lines are flushed.
pub fn init_observability(
    config: &ObservabilityConfig,
    env_filter: EnvFilter,
    stderr_level: LevelFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(stderr_level);

    let (file, guard) = match &config.log_file {
        Some(path) => {
            let (writer, guard) = tracing_appender::non_blocking(open_appender(path)?);
            let layer = fmt::layer().json().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr)
        .with(file)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    Ok(guard)
}

fn open_appender(path: &Path) -> anyhow::Result<RollingFileAppender> {
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let name = path
        .file_name()
        .with_context(|| format!("log path {} has no file name", path.display()))?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name.to_string_lossy())
        .build(dir)
        .with_context(|| format!("failed to open log file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let config = ObservabilityConfig::resolve(
            Some(PathBuf::from("/tmp/x.log")),
            Some(PathBuf::from("/tmp/env")),
            Some(PathBuf::from("/tmp/config")),
        );
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/x.log")));
    }

    #[test]
    fn env_dir_beats_config_dir() {
        let config = ObservabilityConfig::resolve(
            None,
            Some(PathBuf::from("/tmp/env")),
            Some(PathBuf::from("/tmp/config")),
        );
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/env/reword.jsonl")));

        let config = ObservabilityConfig::resolve(None, None, Some(PathBuf::from("/tmp/config")));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/config/reword.jsonl")));
    }

    #[test]
    fn no_file_by_default() {
        assert_eq!(ObservabilityConfig::resolve(None, None, None).log_file, None);
    }

    #[test]
    fn appender_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("reword.jsonl");
        open_appender(&path).unwrap();
        assert!(dir.path().join("nested").is_dir());
    }
}

//! Diagnostic logging to disk.
//!
//! The terminal belongs to the UI, so `tracing` output goes to a daily log
//! file named `toolcurator_<date>.log` in the configured log directory
//! (default: `~/.local/share/toolcurator/logs/`). Nothing is initialized unless
//! logging is enabled in the config or `TOOLCURATOR_LOG` is set; `RUST_LOG`
//! overrides the configured level.

use crate::config::LoggingConfig;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable that enables logging and, when non-empty, names the
/// log directory.
pub const LOG_ENV: &str = "TOOLCURATOR_LOG";

/// Initialize the global tracing subscriber. Returns the log file path when
/// logging was enabled.
pub fn init_tracing(config: &LoggingConfig) -> Option<PathBuf> {
    let env_dir = std::env::var(LOG_ENV).ok();
    if !config.enabled && env_dir.is_none() {
        return None;
    }

    let log_dir = match env_dir.as_deref() {
        Some(dir) if !dir.trim().is_empty() => expand_home(dir),
        _ => expand_home(&config.log_dir),
    };
    let path = log_file_path(&log_dir, chrono::Local::now().date_naive());

    if fs::create_dir_all(&log_dir).is_err() {
        return None;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .ok()?;

    Some(path)
}

fn log_file_path(log_dir: &std::path::Path, date: chrono::NaiveDate) -> PathBuf {
    log_dir.join(format!("toolcurator_{}.log", date.format("%Y-%m-%d")))
}

/// Expand a leading `~/` to the user's home directory.
fn expand_home(dir: &str) -> PathBuf {
    match dir.strip_prefix("~/") {
        Some(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => PathBuf::from(dir),
        },
        None => PathBuf::from(dir),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_is_named_by_date() {
        let date = chrono::NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let path = log_file_path(std::path::Path::new("/var/log/tc"), date);
        assert_eq!(path, PathBuf::from("/var/log/tc/toolcurator_2024-03-09.log"));
    }

    #[test]
    fn expands_home_prefix_only() {
        assert_eq!(expand_home("/tmp/logs"), PathBuf::from("/tmp/logs"));
        assert_eq!(expand_home("logs/~"), PathBuf::from("logs/~"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/logs"), home.join("logs"));
        }
    }
}

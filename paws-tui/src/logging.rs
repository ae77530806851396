//! Tracing setup for the terminal shell.
//!
//! The shell owns the terminal, so logs go to the configured file and are
//! dropped when no file is set. `PAWS_LOG` overrides the configured level.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use paws_core::config::{LogConfig, LOG_ENV};

/// Build the filter from `PAWS_LOG`, falling back to the configured level.
pub fn filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level))
}

pub fn init(config: &LogConfig) -> Result<()> {
    let Some(path) = &config.file else {
        return Ok(());
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter(config))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_file_is_noop() {
        let config = LogConfig::default();
        assert!(init(&config).is_ok());
    }

    #[test]
    fn unwritable_log_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened as a log file.
        let config = LogConfig {
            level: "debug".into(),
            file: Some(dir.path().to_path_buf()),
        };
        assert!(init(&config).is_err());
    }
}

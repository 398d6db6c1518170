//! File-backed logging.
//!
//! The game owns the terminal's alternate screen, so log output never goes to
//! stderr. With no log path configured the logger is not installed and the
//! `log` macros compile to cheap no-ops.

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

use crate::config::AppConfig;

/// Install `env_logger` writing to the configured file.
///
/// Filtering follows `RUST_LOG`, defaulting to `info`. Returns `false` when
/// logging is disabled.
pub fn init(config: &AppConfig) -> Result<bool> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path))?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("install logger")?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_without_path() {
        assert!(!init(&AppConfig::default()).unwrap());
    }

    #[test]
    fn unopenable_path_is_an_error() {
        let config = AppConfig {
            log_path: Some("/nonexistent-dir/for/pong.log".to_string()),
            show_debug: true,
        };
        assert!(init(&config).is_err());
    }
}

//! Runtime configuration from environment variables.
//!
//! The game takes no command-line flags. Rules are compile-time constants;
//! only diagnostics can be adjusted here.

/// Log file path. Unset or empty disables logging.
pub const ENV_LOG_PATH: &str = "PONG_LOG_PATH";

/// `0`/`false` hides the on-screen debug line.
pub const ENV_DEBUG: &str = "PONG_DEBUG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_path: Option<String>,
    pub show_debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: None,
            show_debug: true,
        }
    }
}

impl AppConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment, or a map in tests).
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let log_path = get(ENV_LOG_PATH)
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let show_debug = get(ENV_DEBUG)
            .map(|v| {
                let v = v.trim().to_lowercase();
                !(v == "0" || v == "false" || v == "off")
            })
            .unwrap_or(true);

        Self {
            log_path,
            show_debug,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(AppConfig::from_lookup(lookup(&[])), AppConfig::default());
    }

    #[test]
    fn log_path_is_trimmed_and_empty_disables() {
        let cfg = AppConfig::from_lookup(lookup(&[(ENV_LOG_PATH, "  /tmp/pong.log ")]));
        assert_eq!(cfg.log_path.as_deref(), Some("/tmp/pong.log"));

        let cfg = AppConfig::from_lookup(lookup(&[(ENV_LOG_PATH, "   ")]));
        assert_eq!(cfg.log_path, None);
    }

    #[test]
    fn debug_line_can_be_disabled() {
        for off in ["0", "false", "FALSE", "off"] {
            let cfg = AppConfig::from_lookup(lookup(&[(ENV_DEBUG, off)]));
            assert!(!cfg.show_debug, "{off} should disable");
        }
        let cfg = AppConfig::from_lookup(lookup(&[(ENV_DEBUG, "1")]));
        assert!(cfg.show_debug);
    }
}

//! Runtime configuration, read once from the environment at startup.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::MOVE_MS;

pub const ENV_BEST_PATH: &str = "T2028_BEST_PATH";
pub const ENV_SEED: &str = "T2028_SEED";
pub const ENV_LOG_PATH: &str = "T2028_LOG_PATH";
pub const ENV_NO_ANIM: &str = "T2028_NO_ANIM";

const BEST_DIR: &str = ".tui-2028";
const BEST_FILE: &str = "best.json";
const FALLBACK_BEST_FILE: &str = ".tui-2028-best.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where the best score is persisted
    pub best_path: PathBuf,
    /// Fixed seed for tile placement; None derives one from the clock
    pub seed: Option<u64>,
    /// Log file; logging is off when unset
    pub log_path: Option<PathBuf>,
    /// Play the slide transition before committing a move
    pub animate: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            best_path: default_best_path(None),
            seed: None,
            log_path: None,
            animate: true,
        }
    }
}

impl Config {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup (the environment, or a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let best_path = non_empty(ENV_BEST_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|| default_best_path(non_empty("HOME")));

        let seed = non_empty(ENV_SEED).and_then(|s| s.parse().ok());

        let log_path = non_empty(ENV_LOG_PATH).map(PathBuf::from);

        let animate = !non_empty(ENV_NO_ANIM)
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            best_path,
            seed,
            log_path,
            animate,
        }
    }

    /// The configured seed, or one derived from the wall clock.
    pub fn resolved_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }

    /// Slide transition length; 0 commits moves immediately.
    pub fn settle_ms(&self) -> u32 {
        if self.animate {
            MOVE_MS
        } else {
            0
        }
    }
}

fn default_best_path(home: Option<String>) -> PathBuf {
    match home {
        Some(home) => PathBuf::from(home).join(BEST_DIR).join(BEST_FILE),
        None => PathBuf::from(FALLBACK_BEST_FILE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_config_defaults_without_home() {
        let cfg = config(&[]);
        assert_eq!(cfg.best_path, PathBuf::from(".tui-2028-best.json"));
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.log_path, None);
        assert!(cfg.animate);
        assert_eq!(cfg.settle_ms(), MOVE_MS);
    }

    #[test]
    fn test_config_best_path_under_home() {
        let cfg = config(&[("HOME", "/home/player")]);
        assert_eq!(cfg.best_path, PathBuf::from("/home/player/.tui-2028/best.json"));

        let cfg = config(&[("HOME", "/home/player"), (ENV_BEST_PATH, "/tmp/b.json")]);
        assert_eq!(cfg.best_path, PathBuf::from("/tmp/b.json"));
    }

    #[test]
    fn test_config_seed_and_log_path() {
        let cfg = config(&[(ENV_SEED, " 42 "), (ENV_LOG_PATH, "/tmp/2028.log")]);
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.resolved_seed(), 42);
        assert_eq!(cfg.log_path, Some(PathBuf::from("/tmp/2028.log")));

        let cfg = config(&[(ENV_SEED, "not-a-number"), (ENV_LOG_PATH, "  ")]);
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.log_path, None);
    }

    #[test]
    fn test_config_no_anim() {
        assert!(!config(&[(ENV_NO_ANIM, "1")]).animate);
        assert!(!config(&[(ENV_NO_ANIM, "TRUE")]).animate);
        assert!(config(&[(ENV_NO_ANIM, "0")]).animate);
        assert_eq!(config(&[(ENV_NO_ANIM, "true")]).settle_ms(), 0);
    }

    #[test]
    fn test_config_from_env() {
        // Only checks that reading the real environment does not panic.
        let _config = Config::from_env();
    }
}

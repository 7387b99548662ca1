//! Runtime configuration read from environment variables.
//!
//! - `BRICKS_FILL_MODE`: `color` (default) or `mono`
//! - `BRICKS_DROP_MS`: gravity interval in milliseconds (default 500)
//! - `BRICKS_TICK_MS`: frame tick in milliseconds (default 16)
//! - `BRICKS_LOG_PATH`: append log records to this file (default: no logging)
//! - `BRICKS_LOG_LEVEL`: `error`, `warn`, `info` (default), `debug`, `trace`
//!
//! Values that fail to parse fall back to their defaults.

use std::path::PathBuf;

use log::LevelFilter;

use crate::types::{FillMode, DEFAULT_DROP_MS, TICK_MS};

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub fill_mode: FillMode,
    pub drop_interval_ms: u32,
    pub tick_ms: u32,
    pub log_path: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fill_mode: FillMode::Color,
            drop_interval_ms: DEFAULT_DROP_MS,
            tick_ms: TICK_MS,
            log_path: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup (the process environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let fill_mode = lookup("BRICKS_FILL_MODE")
            .and_then(|s| FillMode::from_str(&s))
            .unwrap_or(defaults.fill_mode);

        let drop_interval_ms = lookup("BRICKS_DROP_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(defaults.drop_interval_ms);

        let tick_ms = lookup("BRICKS_TICK_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(defaults.tick_ms);

        let log_path = lookup("BRICKS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let log_level = lookup("BRICKS_LOG_LEVEL")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.log_level);

        Self {
            fill_mode,
            drop_interval_ms,
            tick_ms,
            log_path,
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(Config::from_lookup(|_| None), Config::default());
    }

    #[test]
    fn values_are_parsed() {
        let config = Config::from_lookup(lookup_from(&[
            ("BRICKS_FILL_MODE", "mono"),
            ("BRICKS_DROP_MS", "250"),
            ("BRICKS_TICK_MS", " 20 "),
            ("BRICKS_LOG_PATH", "/tmp/bricks.log"),
            ("BRICKS_LOG_LEVEL", "debug"),
        ]));
        assert_eq!(config.fill_mode, FillMode::Mono);
        assert_eq!(config.drop_interval_ms, 250);
        assert_eq!(config.tick_ms, 20);
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/bricks.log")));
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn bad_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("BRICKS_FILL_MODE", "sepia"),
            ("BRICKS_DROP_MS", "0"),
            ("BRICKS_TICK_MS", "fast"),
            ("BRICKS_LOG_PATH", "  "),
            ("BRICKS_LOG_LEVEL", "loud"),
        ]));
        assert_eq!(config, Config::default());
    }
}

use std::path::PathBuf;

use thiserror::Error;

use crate::constants::{
    DEFAULT_SNAPSHOT_PATH, DEFAULT_UPCOMING_WINDOW_DAYS, SNAPSHOT_PATH_VAR, WINDOW_DAYS_VAR,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("BIRTHDAY_WINDOW_DAYS must be a non-negative number of days, got '{0}'")]
    InvalidWindow(String),
}

/// Configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where the address book snapshot lives
    pub snapshot_path: PathBuf,
    /// How many days ahead `birthdays` looks
    pub window_days: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot_path: PathBuf::from(DEFAULT_SNAPSHOT_PATH),
            window_days: DEFAULT_UPCOMING_WINDOW_DAYS,
        }
    }
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(SNAPSHOT_PATH_VAR).filter(|p| !p.trim().is_empty()) {
            config.snapshot_path = PathBuf::from(path);
        }

        if let Some(raw) = lookup(WINDOW_DAYS_VAR) {
            config.window_days = raw
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|days| *days >= 0)
                .ok_or(ConfigError::InvalidWindow(raw))?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.snapshot_path, PathBuf::from("addressbook.json"));
        assert_eq!(config.window_days, 7);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("ADDRESS_BOOK_PATH", "/tmp/contacts.json"),
            ("BIRTHDAY_WINDOW_DAYS", " 14 "),
        ]))
        .unwrap();

        assert_eq!(config.snapshot_path, PathBuf::from("/tmp/contacts.json"));
        assert_eq!(config.window_days, 14);
    }

    #[test]
    fn test_blank_path_keeps_default() {
        let config = Config::from_lookup(lookup(&[("ADDRESS_BOOK_PATH", "  ")])).unwrap();
        assert_eq!(config.snapshot_path, PathBuf::from("addressbook.json"));
    }

    #[test]
    fn test_invalid_window() {
        assert_eq!(
            Config::from_lookup(lookup(&[("BIRTHDAY_WINDOW_DAYS", "week")])),
            Err(ConfigError::InvalidWindow("week".to_string()))
        );
        assert!(Config::from_lookup(lookup(&[("BIRTHDAY_WINDOW_DAYS", "-1")])).is_err());
    }
}

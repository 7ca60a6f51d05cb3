//! Configuration for the assistant bot.
//!
//! This module handles loading and validating configuration from environment
//! variables. Everything is optional and falls back to built-in defaults, so
//! the bot runs with no setup at all.

use crate::book::DEFAULT_BIRTHDAY_WINDOW_DAYS;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the assistant bot.
#[derive(Debug, Clone)]
pub struct Config {
    /// How many days ahead the `birthdays` command looks (default: 7)
    pub birthday_window_days: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ROLODEX_BIRTHDAY_WINDOW_DAYS`: Days ahead to scan for upcoming
    ///   birthdays, 1-366 (default: 7)
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let birthday_window_days =
            Self::parse_env_u32("ROLODEX_BIRTHDAY_WINDOW_DAYS", DEFAULT_BIRTHDAY_WINDOW_DAYS)?;

        // A window of zero would hide birthdays happening today, and more
        // than a year wraps past the next occurrence of every birthday
        if !(1..=366).contains(&birthday_window_days) {
            return Err(ConfigError::InvalidValue {
                var: "ROLODEX_BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: "Must be between 1 and 366".to_string(),
            });
        }

        Ok(Config {
            birthday_window_days,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW_DAYS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.birthday_window_days, 7);
    }

    #[test]
    #[serial]
    fn test_config_from_env_uses_defaults() {
        env::remove_var("ROLODEX_BIRTHDAY_WINDOW_DAYS");

        let config = Config::from_env().unwrap();
        assert_eq!(config.birthday_window_days, DEFAULT_BIRTHDAY_WINDOW_DAYS);
    }

    #[test]
    #[serial]
    fn test_config_from_env_custom_window() {
        let mut guard = EnvGuard::new();
        guard.set("ROLODEX_BIRTHDAY_WINDOW_DAYS", "30");

        let config = Config::from_env().unwrap();
        assert_eq!(config.birthday_window_days, 30);
    }

    #[test]
    #[serial]
    fn test_config_rejects_zero_window() {
        let mut guard = EnvGuard::new();
        guard.set("ROLODEX_BIRTHDAY_WINDOW_DAYS", "0");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "ROLODEX_BIRTHDAY_WINDOW_DAYS");
        }
    }

    #[test]
    #[serial]
    fn test_config_rejects_oversized_window() {
        let mut guard = EnvGuard::new();
        guard.set("ROLODEX_BIRTHDAY_WINDOW_DAYS", "400");

        let result = Config::from_env();
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_config_rejects_non_numeric_window() {
        let mut guard = EnvGuard::new();
        guard.set("ROLODEX_BIRTHDAY_WINDOW_DAYS", "soon");

        let result = Config::from_env();
        assert!(result.is_err());
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "ROLODEX_BIRTHDAY_WINDOW_DAYS");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_u32() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U32", "42");

        let result = Config::parse_env_u32("TEST_U32", 10);
        assert_eq!(result.unwrap(), 42);

        let result = Config::parse_env_u32("NONEXISTENT", 10);
        assert_eq!(result.unwrap(), 10);
    }

    #[test]
    #[serial]
    fn test_parse_env_u32_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U32_INVALID", "not-a-number");

        let result = Config::parse_env_u32("TEST_U32_INVALID", 10);
        assert!(result.is_err());
    }
}

//! Configuration management for the address book binary.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::fmt;
use std::str::FromStr;

/// How the binary prints the final contents of the default book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Numbered display lines.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Must be one of: text, json, got: {}", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Configuration for the address book binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the book the demo session works on (default: "Friends")
    pub default_book: String,

    /// Output format for the final book dump (default: text)
    pub output_format: OutputFormat,

    /// Log level used when `RUST_LOG` is not set (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_DEFAULT_BOOK`: Name of the default book (default: "Friends")
    /// - `ADDRESS_BOOK_OUTPUT`: `text` or `json` (default: "text")
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine; a malformed one is not
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(ConfigError::DotenvError(e.to_string())),
        }

        Self::from_vars()
    }

    /// Read configuration from the current process environment only.
    fn from_vars() -> ConfigResult<Self> {
        let defaults = Config::default();

        let default_book =
            env::var("ADDRESS_BOOK_DEFAULT_BOOK").unwrap_or(defaults.default_book);
        if default_book.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_DEFAULT_BOOK".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let output_format = match env::var("ADDRESS_BOOK_OUTPUT") {
            Ok(val) => val
                .parse::<OutputFormat>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "ADDRESS_BOOK_OUTPUT".to_string(),
                    reason,
                })?,
            Err(_) => defaults.output_format,
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            default_book,
            output_format,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_book: "Friends".to_string(),
            output_format: OutputFormat::Text,
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const VARS: [&str; 3] = ["ADDRESS_BOOK_DEFAULT_BOOK", "ADDRESS_BOOK_OUTPUT", "LOG_LEVEL"];

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            for var in VARS {
                env::remove_var(var);
            }
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
        assert_eq!(config.default_book, "Friends");
        assert_eq!(config.output_format, OutputFormat::Text);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    #[serial]
    fn test_config_from_vars_defaults() {
        let _guard = EnvGuard::new();

        let config = Config::from_vars().unwrap();
        assert_eq!(config.default_book, "Friends");
        assert_eq!(config.output_format, OutputFormat::Text);
    }

    #[test]
    #[serial]
    fn test_config_from_vars_valid() {
        let mut guard = EnvGuard::new();
        guard.set("ADDRESS_BOOK_DEFAULT_BOOK", "Family");
        guard.set("ADDRESS_BOOK_OUTPUT", "JSON");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_vars().unwrap();
        assert_eq!(config.default_book, "Family");
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_blank_book_name() {
        let mut guard = EnvGuard::new();
        guard.set("ADDRESS_BOOK_DEFAULT_BOOK", "   ");

        match Config::from_vars() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "ADDRESS_BOOK_DEFAULT_BOOK");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_invalid_output_format() {
        let mut guard = EnvGuard::new();
        guard.set("ADDRESS_BOOK_OUTPUT", "yaml");

        match Config::from_vars() {
            Err(ConfigError::InvalidValue { var, reason }) => {
                assert_eq!(var, "ADDRESS_BOOK_OUTPUT");
                assert!(reason.contains("yaml"));
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert_eq!(" Json ".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("xml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }
}

//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable overriding the log level
pub const ENV_LOG_LEVEL: &str = "PIPEGEN_LOG_LEVEL";
/// Environment variable setting the default output file
pub const ENV_OUTPUT: &str = "PIPEGEN_OUTPUT";
/// Environment variable enabling strict validation
pub const ENV_STRICT: &str = "PIPEGEN_STRICT";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Log level, or any `EnvFilter` directive
    pub log_level: String,
    /// Where generated Jenkinsfiles go; stdout when unset
    pub output: Option<PathBuf>,
    /// Validate configurations before rendering
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            output: None,
            strict: false,
        }
    }
}

impl Config {
    /// Builds the configuration from process environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(level) = lookup(ENV_LOG_LEVEL).filter(|v| !v.trim().is_empty()) {
            config.log_level = level.trim().to_string();
        }
        if let Some(output) = lookup(ENV_OUTPUT).filter(|v| !v.trim().is_empty()) {
            config.output = Some(PathBuf::from(output));
        }
        if let Some(strict) = lookup(ENV_STRICT) {
            config.strict = parse_flag(&strict);
        }

        config
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

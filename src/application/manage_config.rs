//! Config management use case

use crate::error::{RememberError, Result};
use crate::infrastructure::config::validate_display_format;
use crate::infrastructure::{Config, FileSystemRepository, ListRepository};

/// Keys accepted by `get` and `set`
pub const CONFIG_KEYS: &[&str] = &[
    "quick_add_limit",
    "quick_add_min_count",
    "confirm_destructive",
    "display_format",
];

/// Service for managing list configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "quick_add_limit" => Ok(config.quick_add_limit.to_string()),
            "quick_add_min_count" => Ok(config.quick_add_min_count.to_string()),
            "confirm_destructive" => Ok(config.confirm_destructive.to_string()),
            "display_format" => Ok(config.display_format),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "quick_add_limit" => config.quick_add_limit = parse_count(key, value)?,
            "quick_add_min_count" => config.quick_add_min_count = parse_count(key, value)?,
            "confirm_destructive" => {
                config.confirm_destructive = parse_bool(value).ok_or_else(|| {
                    RememberError::Config(format!(
                        "Invalid value for confirm_destructive: '{}' (expected true or false)",
                        value
                    ))
                })?;
            }
            "display_format" => {
                validate_display_format(value)?;
                config.display_format = value.to_string();
            }
            _ => return Err(unknown_key(key)),
        }

        self.repository.save_config(&config)
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

fn unknown_key(key: &str) -> RememberError {
    RememberError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

fn parse_count(key: &str, value: &str) -> Result<usize> {
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(RememberError::Config(format!(
            "Invalid value for {}: '{}' (expected a positive number)",
            key, value
        ))),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

//! Configuration management

use crate::domain::quick_add::{DEFAULT_LIMIT, DEFAULT_MIN_COUNT};
use crate::domain::SuggestOptions;
use crate::error::{RememberError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Directory holding config and data inside a list root
pub const DATA_DIR: &str = ".rememberit";

const CONFIG_FILE: &str = "config.toml";
const DEFAULT_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Maximum number of quick-add suggestions
    #[serde(default = "default_quick_add_limit")]
    pub quick_add_limit: usize,
    /// Occurrences needed before a content value is suggested
    #[serde(default = "default_quick_add_min_count")]
    pub quick_add_min_count: usize,
    /// Ask before delete and reset
    #[serde(default = "default_confirm_destructive")]
    pub confirm_destructive: bool,
    /// strftime pattern used when listing entries
    #[serde(default = "default_display_format")]
    pub display_format: String,
}

fn default_quick_add_limit() -> usize {
    DEFAULT_LIMIT
}

fn default_quick_add_min_count() -> usize {
    DEFAULT_MIN_COUNT
}

fn default_confirm_destructive() -> bool {
    true
}

fn default_display_format() -> String {
    DEFAULT_DISPLAY_FORMAT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            quick_add_limit: default_quick_add_limit(),
            quick_add_min_count: default_quick_add_min_count(),
            confirm_destructive: default_confirm_destructive(),
            display_format: default_display_format(),
        }
    }
}

impl Config {
    /// Load config from .rememberit/config.toml in the given directory.
    ///
    /// An initialized directory without a config file gets the defaults.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let data_dir = path.join(DATA_DIR);
        if !data_dir.is_dir() {
            return Err(RememberError::NotInitialized(path.to_path_buf()));
        }

        let contents = match fs::read_to_string(data_dir.join(CONFIG_FILE)) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(RememberError::Io(e)),
        };

        let config: Config = toml::from_str(&contents)
            .map_err(|e| RememberError::Config(format!("Failed to parse config.toml: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to .rememberit/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let data_dir = path.join(DATA_DIR);

        if !data_dir.exists() {
            fs::create_dir(&data_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(data_dir.join(CONFIG_FILE), contents)?;

        Ok(())
    }

    /// Reject values the rest of the application cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.quick_add_limit == 0 {
            return Err(RememberError::Config(
                "quick_add_limit must be at least 1".to_string(),
            ));
        }
        if self.quick_add_min_count == 0 {
            return Err(RememberError::Config(
                "quick_add_min_count must be at least 1".to_string(),
            ));
        }
        validate_display_format(&self.display_format)
    }

    pub fn suggest_options(&self) -> SuggestOptions {
        SuggestOptions {
            min_count: self.quick_add_min_count,
            limit: self.quick_add_limit,
        }
    }
}

/// Check that a strftime pattern can render a timezone-less timestamp.
///
/// Unknown specifiers and offset specifiers (`%z`, `%Z`) both fail here.
pub fn validate_display_format(format: &str) -> Result<()> {
    let sample = NaiveDate::from_ymd_opt(2000, 1, 1).and_then(|d| d.and_hms_opt(0, 0, 0));
    let renders = sample.is_some_and(|ts| {
        let mut buf = String::new();
        write!(buf, "{}", ts.format(format)).is_ok()
    });

    if format.is_empty() || !renders {
        return Err(RememberError::Config(format!(
            "Invalid display_format: '{}'",
            format
        )));
    }
    Ok(())
}

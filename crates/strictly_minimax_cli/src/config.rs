//! Play configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_minimax::{Mark, SearchOptions};
use tracing::{debug, info, instrument};

/// Settings for interactive play.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Mark the human plays.
    #[serde(default = "default_human")]
    human: Mark,

    /// Whether the engine takes immediate wins without a full search.
    #[serde(default = "default_fast_path")]
    fast_path: bool,

    /// Print every engine candidate with its value before it moves.
    #[serde(default)]
    show_analysis: bool,
}

#[instrument]
fn default_human() -> Mark {
    Mark::X
}

#[instrument]
fn default_fast_path() -> bool {
    true
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            human: default_human(),
            fast_path: default_fast_path(),
            show_analysis: false,
        }
    }
}

impl PlayConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(human = %config.human, fast_path = config.fast_path, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if given, otherwise the defaults.
    #[instrument(skip(path))]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides on top of file values.
    pub fn with_overrides(
        mut self,
        human: Option<Mark>,
        no_fast_path: bool,
        show_analysis: bool,
    ) -> Self {
        if let Some(human) = human {
            self.human = human;
        }
        if no_fast_path {
            self.fast_path = false;
        }
        if show_analysis {
            self.show_analysis = true;
        }
        self
    }

    /// Search options implied by this configuration.
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            fast_path: self.fast_path,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_toml_gives_defaults() {
        assert_eq!(PlayConfig::from_toml("").unwrap(), PlayConfig::default());
    }

    #[test]
    fn test_reads_all_fields() {
        let toml = "human = \"O\"\nfast_path = false\nshow_analysis = true\n";
        let config = PlayConfig::from_toml(toml).unwrap();
        assert_eq!(*config.human(), Mark::O);
        assert!(!*config.fast_path());
        assert!(*config.show_analysis());
        assert!(!config.search_options().fast_path);
    }

    #[test]
    fn test_bad_mark_is_error() {
        let err = PlayConfig::from_toml("human = \"Z\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "human = \"O\"").unwrap();
        let config = PlayConfig::load(Some(file.path())).unwrap();
        assert_eq!(*config.human(), Mark::O);
        assert!(*config.fast_path());
    }

    #[test]
    fn test_missing_file_reports_location() {
        let err = PlayConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
        assert!(err.file.ends_with("config.rs"));
    }

    #[test]
    fn test_error_location_is_caller() {
        let line = line!() + 1;
        let err = ConfigError::new("boom".to_string());
        assert_eq!(err.line, line);
        assert!(err.file.ends_with("config.rs"));
        assert_eq!(err.to_string(), format!("Config error: boom at {}:{}", err.file, line));
    }

    #[test]
    fn test_missing_fields_use_default_functions() {
        let config = PlayConfig::from_toml("show_analysis = true").unwrap();
        assert_eq!(*config.human(), default_human());
        assert_eq!(*config.fast_path(), default_fast_path());
    }

    #[test]
    fn test_overrides_win() {
        let config = PlayConfig::default().with_overrides(Some(Mark::O), true, false);
        assert_eq!(*config.human(), Mark::O);
        assert!(!*config.fast_path());
        assert!(!*config.show_analysis());
    }
}

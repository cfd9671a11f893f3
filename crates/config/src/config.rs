//! Configuration management
//!
//! This module handles loading cadre configuration from TOML.
//!
//! ```toml
//! [general]
//! programName = "cadre"
//!
//! [console]
//! width = 100
//! wrap = true
//! ```

use crate::Result;
use cadre_core::Error;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// General configuration section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Program name used in usage lines and completion scripts
    #[serde(default = "default_program_name", rename = "programName")]
    pub program_name: String,
}

fn default_program_name() -> String {
    "cadre".to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            program_name: default_program_name(),
        }
    }
}

/// Console configuration section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Fixed console width; detected from the terminal when unset
    #[serde(default)]
    pub width: Option<usize>,

    /// Word-wrap help paragraphs wider than the console
    #[serde(default = "default_wrap")]
    pub wrap: bool,
}

fn default_wrap() -> bool {
    true
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            width: None,
            wrap: default_wrap(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub general: GeneralConfig,

    /// Console settings
    #[serde(default)]
    pub console: ConsoleConfig,
}

impl Config {
    /// Load configuration from a file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, TOML parsing fails or the
    /// values do not validate
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Message(format!("Failed to read config file {}: {e}", path.display()))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        config.validate().map_err(|message| Error::Config {
            path: path.to_path_buf(),
            message,
        })?;

        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load configuration from a TOML string
    ///
    /// # Errors
    ///
    /// Returns error if TOML parsing fails or the values do not validate
    pub fn from_toml_str(toml_content: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_content)
            .map_err(|e| Error::Message(format!("Failed to parse config TOML: {e}")))?;
        config
            .validate()
            .map_err(|e| Error::Message(format!("Invalid config: {e}")))?;
        Ok(config)
    }

    /// Load configuration from an explicit path, the default location, or defaults
    ///
    /// An explicit path must exist. The default location
    /// (see [`crate::dirs::default_config_file`]) is optional; when it is
    /// missing the built-in defaults are used.
    ///
    /// # Errors
    ///
    /// Returns error if a config file exists but cannot be loaded
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match crate::dirs::default_config_file() {
            Some(path) if path.exists() => Self::load(path),
            other => {
                tracing::debug!(path = ?other, "No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn validate(&self) -> std::result::Result<(), String> {
        if self.console.width == Some(0) {
            return Err("console.width must be greater than zero".to_string());
        }

        let name = &self.general.program_name;
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(format!(
                "general.programName must be a non-empty word, got {name:?}"
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    // Helper function to create a test directory with a config file
    fn create_test_config(toml_content: &str) -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, toml_content).unwrap();
        (temp_dir, config_path)
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.general.program_name, "cadre");
        assert_eq!(config.console.width, None);
        assert!(config.console.wrap);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_all_fields() {
        let config = Config::from_toml_str(
            r#"
[general]
programName = "myapp"

[console]
width = 100
wrap = false
"#,
        )
        .unwrap();

        assert_eq!(config.general.program_name, "myapp");
        assert_eq!(config.console.width, Some(100));
        assert!(!config.console.wrap);
    }

    #[test]
    fn test_zero_width_rejected() {
        let err = Config::from_toml_str("[console]\nwidth = 0\n").unwrap_err();
        assert!(err.to_string().contains("console.width"));
    }

    #[test]
    fn test_program_name_with_whitespace_rejected() {
        let err = Config::from_toml_str("[general]\nprogramName = \"my app\"\n").unwrap_err();
        assert!(err.to_string().contains("programName"));
    }

    #[test]
    fn test_load_from_file() {
        let (_dir, path) = create_test_config("[console]\nwidth = 72\n");
        let config = Config::load(&path).unwrap();
        assert_eq!(config.console.width, Some(72));
    }

    #[test]
    fn test_load_reports_path_on_parse_error() {
        let (_dir, path) = create_test_config("[console\nwidth = 72\n");
        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = Config::load(temp_dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_or_default_with_explicit_path() {
        let (_dir, path) = create_test_config("[general]\nprogramName = \"tool\"\n");
        let config = Config::load_or_default(Some(&path)).unwrap();
        assert_eq!(config.general.program_name, "tool");
    }
}

//! XDG directory utilities
//!
//! This module provides XDG-compliant directory paths for cadre using the
//! `xdg` crate. `XDG_CONFIG_HOME` defaults to ~/.config.

use std::path::PathBuf;
use xdg::BaseDirectories;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "CADRE_CONFIG";

/// Get the cadre config directory
///
/// Returns `$XDG_CONFIG_HOME/cadre` or `~/.config/cadre`
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    BaseDirectories::with_prefix("cadre").get_config_home()
}

/// Get the default config file path
///
/// Returns `$CADRE_CONFIG` when set, otherwise `config.toml` inside
/// [`config_dir`].
#[must_use]
pub fn default_config_file() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    config_dir().map(|d| d.join("config.toml"))
}

//! Configuration management for cadre
//!
//! This crate handles:
//! - Configuration loading and validation
//! - XDG directory management
//! - Logging initialization

pub mod config;
pub mod dirs;
pub mod logging;

// Re-export error types from core
pub use cadre_core::{Error, Result};

// Re-export main types
pub use config::{Config, ConsoleConfig, GeneralConfig};
pub use dirs::{config_dir, default_config_file};

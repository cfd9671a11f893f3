//! Core types and utilities for cadre
//!
//! This is the foundation crate (Layer 0) that all other cadre crates depend on.
//! It provides:
//! - Base error types
//! - Command identifiers and the snake_case derivation used to migrate type names
//! - Shell dialects for completion scripts
//! - The `Console` output trait and its text layout helpers
//!
//! This crate has no dependencies on other cadre crates.

pub mod error;
pub mod identifier;
pub mod shell;
pub mod text;
pub mod traits;

pub use error::{Error, Result};
pub use identifier::{Identifier, to_snake_case};
pub use shell::Shell;
pub use traits::Console;

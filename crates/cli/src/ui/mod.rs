//! Terminal UI components for cadre

pub mod console;

pub use console::{BufferConsole, DEFAULT_WIDTH, Terminal};

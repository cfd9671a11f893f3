//! Console implementations
//!
//! - [`Terminal`] writes to stdout and measures the real terminal
//! - [`BufferConsole`] records lines in memory, for tests and capturing output

use cadre_config::ConsoleConfig;
use cadre_core::Console;
use std::io::Write;
use std::sync::{Mutex, PoisonError};

/// Width used when the terminal size cannot be detected (e.g. piped output)
pub const DEFAULT_WIDTH: usize = 80;

/// Console writing to stdout
#[derive(Debug, Clone)]
pub struct Terminal {
    width: Option<usize>,
    wrap: bool,
}

impl Terminal {
    /// Create a terminal console with detected width and wrapping enabled
    pub fn new() -> Self {
        Self {
            width: None,
            wrap: true,
        }
    }

    /// Create a terminal console from the `[console]` config section
    pub fn from_config(config: &ConsoleConfig) -> Self {
        Self {
            width: config.width,
            wrap: config.wrap,
        }
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

fn detect_width() -> Option<usize> {
    terminal_size::terminal_size().map(|(terminal_size::Width(w), _)| usize::from(w))
}

impl Console for Terminal {
    fn print(&self, line: &str) {
        let mut stdout = std::io::stdout().lock();
        // A closed pipe (e.g. `cadre completions bash | head`) is not an error
        if let Err(e) = writeln!(stdout, "{line}") {
            tracing::trace!("Failed to write to stdout: {e}");
        }
    }

    fn width(&self) -> usize {
        self.width.or_else(detect_width).unwrap_or(DEFAULT_WIDTH)
    }

    fn wraps(&self) -> bool {
        self.wrap
    }
}

/// Console recording printed lines in memory
#[derive(Debug)]
pub struct BufferConsole {
    lines: Mutex<Vec<String>>,
    width: usize,
    wrap: bool,
}

impl BufferConsole {
    /// Create a recording console with a fixed width
    pub fn new(width: usize) -> Self {
        Self {
            lines: Mutex::new(Vec::new()),
            width,
            wrap: true,
        }
    }

    /// Enable or disable word wrapping in `center`
    #[must_use]
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Lines printed so far
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Everything printed so far, one line per printed line
    pub fn output(&self) -> String {
        let lines = self.lines();
        let mut output = lines.join("\n");
        if !lines.is_empty() {
            output.push('\n');
        }
        output
    }

    /// Forget recorded output
    pub fn clear(&self) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Default for BufferConsole {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH)
    }
}

impl Console for BufferConsole {
    fn print(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
    }

    fn width(&self) -> usize {
        self.width
    }

    fn wraps(&self) -> bool {
        self.wrap
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;

    #[test]
    fn test_buffer_console_records_lines() {
        let console = BufferConsole::new(40);
        console.print("first");
        console.newline();
        console.print("second");

        assert_eq!(console.lines(), vec!["first", "", "second"]);
        assert_eq!(console.output(), "first\n\nsecond\n");
    }

    #[test]
    fn test_buffer_console_empty_output() {
        let console = BufferConsole::default();
        assert_eq!(console.output(), "");
        assert_eq!(console.width(), DEFAULT_WIDTH);
    }

    #[test]
    fn test_buffer_console_clear() {
        let console = BufferConsole::new(40);
        console.print("gone");
        console.clear();
        assert!(console.lines().is_empty());
    }

    #[test]
    fn test_buffer_console_center_uses_width() {
        let console = BufferConsole::new(10);
        assert_eq!(console.center("abcd"), vec!["   abcd"]);
    }

    #[test]
    fn test_buffer_console_without_wrap_keeps_long_lines() {
        let console = BufferConsole::new(10).with_wrap(false);
        assert_eq!(console.center("alpha beta gamma"), vec!["alpha beta gamma"]);
    }

    #[test]
    fn test_terminal_width_override() {
        let config = ConsoleConfig {
            width: Some(120),
            wrap: false,
        };
        let terminal = Terminal::from_config(&config);
        assert_eq!(terminal.width(), 120);
        assert!(!terminal.wraps());
    }

    #[test]
    fn test_terminal_detected_width_is_positive() {
        assert!(Terminal::new().width() > 0);
    }
}

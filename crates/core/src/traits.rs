//! Core behavioral traits for cadre components
//!
//! Commands write through these traits instead of touching stdout directly,
//! which keeps them testable with recording implementations.

use crate::text;

/// Line-oriented console output
///
/// Output methods take `&self`: implementations synchronize internally, so a
/// console can be shared between a command context and its sub-contexts.
///
/// # Examples
///
/// ```ignore
/// fn greet(console: &dyn Console) {
///     for line in console.center("Hello!") {
///         console.print(&line);
///     }
///     console.newline();
/// }
/// ```
pub trait Console: Send + Sync {
    /// Print a single line
    fn print(&self, line: &str);

    /// Width of the console in columns
    fn width(&self) -> usize;

    /// Whether `center` word-wraps paragraphs wider than the console
    fn wraps(&self) -> bool {
        true
    }

    /// Print an empty line
    fn newline(&self) {
        self.print("");
    }

    /// Center a block of lines, keeping their relative alignment
    fn center_lines(&self, lines: &[String]) -> Vec<String> {
        text::center_block(lines, self.width())
    }

    /// Split a string into lines (wrapping if enabled) and center them
    fn center(&self, text: &str) -> Vec<String> {
        text::center_text(text, self.width(), self.wraps())
    }
}

//! Help rendering
//!
//! The standard help presentation is an optional centered banner followed by
//! the centered help text. Commands opt in by calling
//! [`AnyCommand::output_help_header`](crate::command::AnyCommand::output_help_header)
//! from their `output_help`.

use cadre_core::Console;
use cadre_core::text::display_width;

/// Render the help header: banner block, then help text
///
/// Output, in order:
/// 1. banner present: a blank line, every banner line centered as one block,
///    a blank line
/// 2. help non-empty: the centered (possibly wrapped) help lines, a blank line
///
/// Nothing is printed when there is no banner and the help text is empty.
pub fn render_help_header(console: &dyn Console, ascii_header: Option<&[String]>, help: &str) {
    if let Some(header) = ascii_header {
        console.newline();
        for line in console.center_lines(header) {
            console.print(&line);
        }
        console.newline();
    }

    if !help.is_empty() {
        for line in console.center(help) {
            console.print(&line);
        }
        console.newline();
    }
}

/// First non-empty line of a help text, trimmed
pub fn summary(help: &str) -> &str {
    help.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("")
}

/// Render a two-column list of names and descriptions
///
/// Names are padded to the widest name so descriptions line up.
pub fn render_command_list(console: &dyn Console, entries: &[(String, String)]) {
    let name_width = entries
        .iter()
        .map(|(name, _)| display_width(name))
        .max()
        .unwrap_or(0);

    for (name, description) in entries {
        if description.is_empty() {
            console.print(&format!("  {name}"));
        } else {
            let padding = " ".repeat(name_width - display_width(name));
            console.print(&format!("  {name}{padding}  {description}"));
        }
    }
}

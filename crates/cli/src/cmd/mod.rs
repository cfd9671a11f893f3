//! Commands of the cadre application
//!
//! [`app`] assembles the command tree driven by the `cadre` binary:
//!
//! ```text
//! cadre
//! ├── about        (default)
//! ├── greet
//! └── text
//!     ├── echo     (default)
//!     ├── upper
//!     └── word_count
//! ```

pub mod about;
pub mod text;

use cadre_core::Result;

use crate::command::FnCommand;
use crate::group::CommandGroup;

/// Build the root command group
///
/// # Errors
///
/// Returns an error if an identifier in the tree is invalid or registered twice.
pub fn app() -> Result<CommandGroup> {
    CommandGroup::builder()
        .help("Composable commands with uniform help and shell completion")
        .ascii_header(about::BANNER)
        .command("about", about::AboutCommand)
        .command(
            "greet",
            FnCommand::new("Greet someone by name", |context| {
                let name = if context.input.arguments.is_empty() {
                    "world".to_string()
                } else {
                    context.input.arguments.join(" ")
                };
                context.console().print(&format!("Hello, {name}!"));
                Ok(())
            }),
        )
        .command("text", text::group()?)
        .default_command("about")
        .build()
}

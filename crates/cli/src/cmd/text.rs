//! Text utility commands
//!
//! A small group showing the range of command shapes: a struct command with
//! flags and its own completion function, a closure command, and a command
//! registered under an identifier derived from its type name.

use cadre_core::{Identifier, Result as CoreResult, Shell};
use thiserror::Error;

use crate::command::{AnyCommand, FnCommand};
use crate::completion;
use crate::context::CommandContext;
use crate::error::{CommandError, Result};
use crate::group::CommandGroup;

/// Failures of the text commands
#[derive(Debug, Error)]
pub enum TextError {
    /// The command was run without arguments
    #[error("'{0}' needs at least one word")]
    NoInput(&'static str),

    /// An argument looked like a flag but is not one
    #[error("Unknown flag '{0}'")]
    UnknownFlag(String),
}

/// Build the `text` group
///
/// # Errors
///
/// Returns an error if a sub-command identifier is invalid.
pub fn group() -> CoreResult<CommandGroup> {
    CommandGroup::builder()
        .help("Text utilities.\nRuns `echo` when no sub-command is given.")
        .command("echo", EchoCommand)
        .command(
            "upper",
            FnCommand::new("Print the arguments in upper case", |context| {
                if context.input.arguments.is_empty() {
                    return Err(CommandError::failed(TextError::NoInput("upper")));
                }
                let line = context.input.arguments.join(" ").to_uppercase();
                context.console().print(&line);
                Ok(())
            }),
        )
        .command(
            Identifier::from_type_name(std::any::type_name::<WordCount>())?,
            WordCount,
        )
        .default_command("echo")
        .build()
}

/// Print the arguments, optionally upper-cased or centered
#[derive(Debug, Default)]
pub struct EchoCommand;

impl EchoCommand {
    const FLAGS: [&'static str; 2] = ["--upper", "--center"];
}

impl AnyCommand for EchoCommand {
    fn help(&self) -> &str {
        "Print the arguments.\n\
         --upper prints them in upper case, --center centers them on the console."
    }

    fn run(&self, context: &mut CommandContext) -> Result<()> {
        let mut upper = false;
        let mut center = false;
        let mut words = Vec::new();

        for arg in &context.input.arguments {
            match arg.as_str() {
                "--upper" => upper = true,
                "--center" => center = true,
                flag if flag.starts_with("--") => {
                    return Err(CommandError::failed(TextError::UnknownFlag(flag.to_string())));
                }
                word => words.push(word),
            }
        }

        let mut line = words.join(" ");
        if upper {
            line = line.to_uppercase();
        }

        let console = context.console();
        if center {
            for centered in console.center(&line) {
                console.print(&centered);
            }
        } else {
            console.print(&line);
        }
        Ok(())
    }

    fn output_auto_complete(&self, context: &mut CommandContext) -> Result<()> {
        context.console().print(&Self::FLAGS.join(" "));
        Ok(())
    }

    fn output_help(&self, context: &mut CommandContext) -> Result<()> {
        self.output_help_header(context);
        context.console().print(&format!(
            "Usage: {} [--upper] [--center] [<word>...]",
            context.input.executable()
        ));
        Ok(())
    }

    fn render_completion_functions(&self, context: &CommandContext, shell: Shell) -> String {
        completion::word_list_function(context, shell, &Self::FLAGS)
    }
}

/// Count the words in the arguments
#[derive(Debug, Default)]
pub struct WordCount;

impl AnyCommand for WordCount {
    fn help(&self) -> &str {
        "Count the words in the arguments"
    }

    fn run(&self, context: &mut CommandContext) -> Result<()> {
        let count: usize = context
            .input
            .arguments
            .iter()
            .map(|arg| arg.split_whitespace().count())
            .sum();
        context.console().print(&count.to_string());
        Ok(())
    }
}

//! cadre CLI library
//!
//! Commands share one small contract, [`AnyCommand`](command::AnyCommand):
//! they run, describe themselves and render shell completion functions.
//! [`CommandGroup`](group::CommandGroup) composes them into trees and the
//! `cadre` binary drives the demo tree built by [`cmd::app`].

pub mod cmd;
pub mod command;
pub mod completion;
pub mod context;
pub mod driver;
pub mod error;
pub mod group;
pub mod help;
pub mod ui;

use anyhow::{Context, Result};
use cadre_config::Config;
use cadre_core::{Console, Identifier, Shell};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use command::AnyCommand;
use context::{CommandContext, CommandInput};
use driver::Driver;
use error::CommandError;
use group::CommandGroup;
use ui::Terminal;

/// cadre - composable commands with uniform help and shell completion
#[derive(Parser, Debug)]
#[command(name = "cadre")]
#[command(about = "Composable commands with uniform help and shell completion")]
#[command(version)]
#[command(disable_help_subcommand = true)]
#[command(long_about = "Composable commands with uniform help and shell completion

Every command can run, print centered help under an optional banner,
offer autocomplete candidates and render completion functions for
bash, zsh and fish.

Examples:
  • cadre run greet Ada
  • cadre run text upper hello
  • cadre help text echo
  • cadre completions zsh > ~/.zfunc/_cadre")]
pub struct Cli {
    /// Path to the config file
    #[arg(long, env = "CADRE_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output (shows DEBUG level logs)
    #[arg(short, long)]
    pub verbose: bool,

    /// Write logs to a file (useful for debugging)
    #[arg(long, env = "CADRE_LOG_FILE", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for cadre CLI
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a command of the application
    #[command(long_about = "Run a command of the application

When the first argument names a sub-command of the command, that
sub-command runs with the remaining arguments. Otherwise the command
itself runs with all of them.

Examples:
  • cadre run greet Ada
  • cadre run text upper hello
  • cadre run text --center hello")]
    Run {
        /// Identifier of the command (e.g. `text`, `greet`)
        command: String,

        /// Arguments passed to the command unchanged
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Show help for the application or one of its commands
    Help {
        /// Identifier of the command
        command: Option<String>,

        /// Identifier of one of its sub-commands
        subcommand: Option<String>,
    },

    /// Print autocomplete candidates for the application or one of its commands
    Autocomplete {
        /// Identifier of the command
        command: Option<String>,

        /// Identifier of one of its sub-commands
        subcommand: Option<String>,
    },

    /// Print a shell completion script
    #[command(long_about = "Print a shell completion script

Examples:
  • cadre completions bash > ~/.local/share/bash-completion/completions/cadre
  • cadre completions zsh > ~/.zfunc/_cadre
  • cadre completions fish > ~/.config/fish/completions/cadre.fish")]
    Completions {
        /// Target shell (bash, zsh, fish)
        shell: Shell,
    },

    /// Print the command identifier derived from Rust type names
    Identify {
        /// Type names such as `UserCreate` or `my_app::HTTPServer`
        #[arg(required = true, value_name = "TYPE_NAME")]
        type_names: Vec<String>,
    },
}

/// Main entry point for the CLI application
///
/// # Errors
///
/// Returns an error if logging or the config cannot be initialized, or if the
/// command fails.
pub fn run(cli: Cli) -> Result<()> {
    cadre_config::logging::init(cli.verbose, cli.log_file.as_deref())?;

    let config = Config::load_or_default(cli.config.as_deref())?;
    let console: Arc<dyn Console> = Arc::new(Terminal::from_config(&config.console));
    let program = config.general.program_name.clone();

    let app = cmd::app().context("Failed to build command tree")?;
    let mut context = CommandContext::new(
        console,
        Arc::new(config),
        CommandInput::new(program, Vec::new()),
    );

    execute(cli.command, &app, &mut context)
}

/// Execute a parsed command against a command tree
///
/// Output goes through the context's console, so callers choose where it ends
/// up.
///
/// # Errors
///
/// Returns an error if the command is unknown, fails, or a type name does not
/// convert to an identifier.
pub fn execute(command: Commands, app: &CommandGroup, context: &mut CommandContext) -> Result<()> {
    match command {
        Commands::Run { command, mut args } => {
            let (mut target, mut sub_context) = lookup(app, context, &command)?;
            if let Some(child) = args.first().and_then(move |id| target.child(id)) {
                let id = args.remove(0);
                sub_context = sub_context.subcommand(&id);
                target = child;
            }

            let mut sub_context = sub_context.with_arguments(args);
            tracing::debug!(command = %sub_context.input.executable(), "Running command");
            target.run(&mut sub_context)?;
        }
        Commands::Help { command: None, .. } => app.output_help(context)?,
        Commands::Help {
            command: Some(command),
            subcommand,
        } => {
            let (target, mut sub_context) =
                lookup_path(app, context, &command, subcommand.as_deref())?;
            target.output_help(&mut sub_context)?;
        }
        Commands::Autocomplete { command: None, .. } => app.output_auto_complete(context)?,
        Commands::Autocomplete {
            command: Some(command),
            subcommand,
        } => {
            let (target, mut sub_context) =
                lookup_path(app, context, &command, subcommand.as_deref())?;
            target.output_auto_complete(&mut sub_context)?;
        }
        Commands::Completions { shell } => {
            let script = completion::completion_script(&Driver::new(app), context, shell);
            let console = context.console();
            for line in script.lines() {
                console.print(line);
            }
        }
        Commands::Identify { type_names } => {
            let console = context.console();
            for type_name in &type_names {
                let id = Identifier::from_type_name(type_name)?;
                console.print(&format!("{type_name}\t{id}"));
            }
        }
    }
    Ok(())
}

type Resolved<'a> = (&'a dyn AnyCommand, CommandContext);

/// Resolve a top-level command and derive its context
fn lookup<'a>(
    app: &'a CommandGroup,
    context: &CommandContext,
    command: &str,
) -> std::result::Result<Resolved<'a>, CommandError> {
    let target = app
        .get(command)
        .ok_or_else(|| CommandError::UnknownCommand(command.to_string()))?;
    Ok((target, context.subcommand(command)))
}

/// Resolve a top-level command and, if given, one of its sub-commands
fn lookup_path<'a>(
    app: &'a CommandGroup,
    context: &CommandContext,
    command: &str,
    subcommand: Option<&str>,
) -> std::result::Result<Resolved<'a>, CommandError> {
    let (target, sub_context) = lookup(app, context, command)?;
    let Some(subcommand) = subcommand else {
        return Ok((target, sub_context));
    };

    let child = target
        .child(subcommand)
        .ok_or_else(|| CommandError::UnknownCommand(format!("{command} {subcommand}")))?;
    Ok((child, sub_context.subcommand(subcommand)))
}

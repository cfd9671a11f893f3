//! Command groups
//!
//! A [`CommandGroup`] is a command made of named sub-commands. It lists them
//! in its help, offers their identifiers for autocompletion and renders a
//! completion function that dispatches to theirs. Running a group runs its
//! default sub-command, if it has one.

use cadre_core::{Error, Identifier, Shell};
use indexmap::IndexMap;

use crate::command::AnyCommand;
use crate::completion::{self, CompletionEntry};
use crate::context::CommandContext;
use crate::error::{CommandError, Result};
use crate::help;

/// A command made of named sub-commands
pub struct CommandGroup {
    help: String,
    ascii_header: Option<Vec<String>>,
    commands: IndexMap<Identifier, Box<dyn AnyCommand>>,
    default_command: Option<Identifier>,
}

impl CommandGroup {
    /// Start building a group
    pub fn builder() -> CommandGroupBuilder {
        CommandGroupBuilder::default()
    }

    /// Get a sub-command by identifier
    pub fn get(&self, identifier: &str) -> Option<&dyn AnyCommand> {
        self.commands.get(identifier).map(Box::as_ref)
    }

    /// Sub-commands in registration order
    pub fn commands(&self) -> impl Iterator<Item = (&Identifier, &dyn AnyCommand)> {
        self.commands.iter().map(|(id, cmd)| (id, cmd.as_ref()))
    }

    /// Identifier of the default sub-command
    pub fn default_command(&self) -> Option<&Identifier> {
        self.default_command.as_ref()
    }

    /// Number of sub-commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the group has no sub-commands
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    fn identifiers(&self) -> String {
        self.commands
            .keys()
            .map(Identifier::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl AnyCommand for CommandGroup {
    fn help(&self) -> &str {
        &self.help
    }

    fn ascii_header(&self) -> Option<Vec<String>> {
        self.ascii_header.clone()
    }

    fn run(&self, context: &mut CommandContext) -> Result<()> {
        let Some((id, command)) = self
            .default_command
            .as_ref()
            .and_then(|id| self.commands.get_key_value(id))
        else {
            return Err(CommandError::MissingSubcommand {
                group: context.input.executable(),
                available: self.identifiers(),
            });
        };

        tracing::debug!(group = %context.input.executable(), command = %id, "Running default command");

        context.input.executable_path.push(id.to_string());
        let result = command.run(context);
        context.input.executable_path.pop();
        result
    }

    fn output_auto_complete(&self, context: &mut CommandContext) -> Result<()> {
        context.console().print(&self.identifiers());
        Ok(())
    }

    fn output_help(&self, context: &mut CommandContext) -> Result<()> {
        self.output_help_header(context);

        let console = context.console();
        console.print(&format!("Usage: {} <command>", context.input.executable()));
        console.newline();

        if !self.commands.is_empty() {
            let entries: Vec<(String, String)> = self
                .commands
                .iter()
                .map(|(id, command)| {
                    let mut description = help::summary(command.help()).to_string();
                    if self.default_command.as_ref() == Some(id) {
                        if !description.is_empty() {
                            description.push(' ');
                        }
                        description.push_str("(default)");
                    }
                    (id.to_string(), description)
                })
                .collect();

            console.print("Commands:");
            help::render_command_list(console, &entries);
            console.newline();
        }

        Ok(())
    }

    fn child(&self, identifier: &str) -> Option<&dyn AnyCommand> {
        self.get(identifier)
    }

    fn render_completion_functions(&self, context: &CommandContext, shell: Shell) -> String {
        let mut entries = Vec::with_capacity(self.commands.len());
        let mut children = String::new();

        for (id, command) in &self.commands {
            let sub_context = context.subcommand(id.as_str());
            let functions = command.render_completion_functions(&sub_context, shell);

            let function = if functions.is_empty() {
                None
            } else {
                Some(completion::function_name(sub_context.executable_path()))
            };

            entries.push(CompletionEntry {
                name: id.to_string(),
                description: help::summary(command.help()).to_string(),
                function,
            });

            if !functions.is_empty() {
                // Bash and zsh functions are separated by a blank line
                if shell != Shell::Fish {
                    children.push('\n');
                }
                children.push_str(&functions);
            }
        }

        tracing::trace!(
            group = %context.input.executable(),
            %shell,
            commands = entries.len(),
            "Rendered completion functions"
        );

        let mut out = completion::group_function(context, shell, &entries);
        out.push_str(&children);
        out
    }
}

impl std::fmt::Debug for CommandGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandGroup")
            .field("help", &self.help)
            .field("commands", &self.commands.keys().collect::<Vec<_>>())
            .field("default_command", &self.default_command)
            .finish_non_exhaustive()
    }
}

/// Builder for [`CommandGroup`]
///
/// Identifiers are validated in [`build`](Self::build), so registration reads
/// as a flat list:
///
/// ```rust
/// use cadre::command::FnCommand;
/// use cadre::group::CommandGroup;
///
/// let group = CommandGroup::builder()
///     .help("Text utilities")
///     .command("echo", FnCommand::new("Print words", |_| Ok(())))
///     .default_command("echo")
///     .build()
///     .unwrap();
///
/// assert_eq!(group.len(), 1);
/// ```
#[derive(Default)]
pub struct CommandGroupBuilder {
    help: String,
    ascii_header: Option<Vec<String>>,
    commands: Vec<(String, Box<dyn AnyCommand>)>,
    default_command: Option<String>,
}

impl CommandGroupBuilder {
    /// Set the help text
    #[must_use]
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    /// Set the banner
    #[must_use]
    pub fn ascii_header<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ascii_header = Some(lines.into_iter().map(Into::into).collect());
        self
    }

    /// Register a sub-command under an identifier
    #[must_use]
    pub fn command(mut self, identifier: impl Into<String>, command: impl AnyCommand + 'static) -> Self {
        self.commands.push((identifier.into(), Box::new(command)));
        self
    }

    /// Run this sub-command when the group itself is run
    #[must_use]
    pub fn default_command(mut self, identifier: impl Into<String>) -> Self {
        self.default_command = Some(identifier.into());
        self
    }

    /// Validate identifiers and build the group
    ///
    /// # Errors
    ///
    /// - `Error::InvalidIdentifier` if an identifier breaks the identifier rules
    /// - `Error::DuplicateCommand` if an identifier is registered twice
    /// - `Error::UnknownCommand` if the default command is not registered
    pub fn build(self) -> cadre_core::Result<CommandGroup> {
        let mut commands = IndexMap::with_capacity(self.commands.len());
        for (name, command) in self.commands {
            let id = Identifier::new(name)?;
            if commands.contains_key(&id) {
                return Err(Error::DuplicateCommand(id.to_string()));
            }
            commands.insert(id, command);
        }

        let default_command = match self.default_command {
            Some(name) => {
                let id = Identifier::new(name)?;
                if !commands.contains_key(&id) {
                    return Err(Error::UnknownCommand(id.to_string()));
                }
                Some(id)
            }
            None => None,
        };

        Ok(CommandGroup {
            help: self.help,
            ascii_header: self.ascii_header,
            commands,
            default_command,
        })
    }
}

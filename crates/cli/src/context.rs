//! Execution context passed to every command
//!
//! A [`CommandContext`] bundles the console, the loaded configuration and the
//! command input. Commands receive it by exclusive reference for the duration
//! of a single call and never keep it.

use cadre_config::Config;
use cadre_core::Console;
use indexmap::IndexMap;
use std::sync::Arc;

/// Raw input for a command invocation
///
/// `executable_path` names the command being executed, starting with the
/// program name (`["cadre", "text", "upper"]`). `arguments` are the words
/// following it, unparsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandInput {
    /// Program name followed by the identifiers leading to the command
    pub executable_path: Vec<String>,
    /// Remaining words after the executable path
    pub arguments: Vec<String>,
}

impl CommandInput {
    /// Create input for a program invocation
    pub fn new(program: impl Into<String>, arguments: Vec<String>) -> Self {
        Self {
            executable_path: vec![program.into()],
            arguments,
        }
    }

    /// The executable path joined by spaces, as typed by the user
    pub fn executable(&self) -> String {
        self.executable_path.join(" ")
    }
}

/// Runtime context for commands
///
/// Cloning is cheap: the console and configuration are shared through `Arc`.
///
/// # Examples
///
/// ```no_run
/// use cadre::context::{CommandContext, CommandInput};
/// use cadre::ui::Terminal;
/// use cadre_config::Config;
/// use std::sync::Arc;
///
/// let config = Config::default();
/// let context = CommandContext::new(
///     Arc::new(Terminal::from_config(&config.console)),
///     Arc::new(config),
///     CommandInput::new("cadre", vec![]),
/// );
///
/// context.console().print("ready");
/// ```
#[derive(Clone)]
pub struct CommandContext {
    /// Output console
    pub console: Arc<dyn Console>,
    /// Shared configuration
    pub config: Arc<Config>,
    /// Invocation input
    pub input: CommandInput,
    /// Free-form values commands may pass down to sub-commands
    pub user_info: IndexMap<String, String>,
}

impl CommandContext {
    /// Create a new context
    pub fn new(console: Arc<dyn Console>, config: Arc<Config>, input: CommandInput) -> Self {
        Self {
            console,
            config,
            input,
            user_info: IndexMap::new(),
        }
    }

    /// Get the console
    #[inline]
    pub fn console(&self) -> &dyn Console {
        self.console.as_ref()
    }

    /// Get the executable path (program name first)
    #[inline]
    pub fn executable_path(&self) -> &[String] {
        &self.input.executable_path
    }

    /// Program name, the first component of the executable path
    pub fn program_name(&self) -> &str {
        self.input
            .executable_path
            .first()
            .map_or(self.config.general.program_name.as_str(), String::as_str)
    }

    /// Derive the context of a sub-command
    ///
    /// The executable path is extended by `name`; arguments and user info are
    /// carried over unchanged.
    #[must_use]
    pub fn subcommand(&self, name: &str) -> Self {
        let mut context = self.clone();
        context.input.executable_path.push(name.to_string());
        context
    }

    /// Replace the arguments
    #[must_use]
    pub fn with_arguments(mut self, arguments: Vec<String>) -> Self {
        self.input.arguments = arguments;
        self
    }
}

impl std::fmt::Debug for CommandContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandContext")
            .field("config", &self.config)
            .field("input", &self.input)
            .field("user_info", &self.user_info)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use crate::ui::BufferConsole;

    fn context() -> CommandContext {
        CommandContext::new(
            Arc::new(BufferConsole::new(40)),
            Arc::new(Config::default()),
            CommandInput::new("cadre", vec!["one".to_string()]),
        )
    }

    #[test]
    fn test_subcommand_extends_path_only() {
        let root = context();
        let sub = root.subcommand("text").subcommand("upper");

        assert_eq!(sub.executable_path(), ["cadre", "text", "upper"]);
        assert_eq!(sub.input.arguments, vec!["one"]);
        assert_eq!(sub.input.executable(), "cadre text upper");
        // The parent is untouched
        assert_eq!(root.executable_path(), ["cadre"]);
    }

    #[test]
    fn test_subcommand_shares_console() {
        let console = Arc::new(BufferConsole::new(40));
        let root = CommandContext::new(
            console.clone(),
            Arc::new(Config::default()),
            CommandInput::new("cadre", vec![]),
        );

        root.subcommand("about").console().print("from child");
        assert_eq!(console.lines(), vec!["from child"]);
    }

    #[test]
    fn test_program_name_falls_back_to_config() {
        let mut ctx = context();
        assert_eq!(ctx.program_name(), "cadre");

        ctx.input.executable_path.clear();
        assert_eq!(ctx.program_name(), Config::default().general.program_name);
    }

    #[test]
    fn test_with_arguments() {
        let ctx = context().with_arguments(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(ctx.input.arguments, vec!["a", "b"]);
    }
}

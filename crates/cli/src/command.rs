//! Command trait for cadre
//!
//! This module defines the `AnyCommand` trait that every command implements.
//! Only `help` and `run` are required; every other capability has an inert
//! default, so a command starts out runnable and opts into richer help and
//! completion behavior one method at a time.
//!
//! Commands are stored type-erased (`Box<dyn AnyCommand>`) and identified by
//! the name they are registered under, see
//! [`CommandGroup`](crate::group::CommandGroup).

use cadre_core::Shell;

use crate::context::CommandContext;
use crate::error::Result;
use crate::help;

/// Trait for all cadre commands
///
/// # Example
///
/// ```rust
/// use cadre::command::AnyCommand;
/// use cadre::context::CommandContext;
/// use cadre::error::Result;
///
/// struct Hello;
///
/// impl AnyCommand for Hello {
///     fn help(&self) -> &str {
///         "Say hello"
///     }
///
///     fn run(&self, context: &mut CommandContext) -> Result<()> {
///         context.console().print("Hello!");
///         Ok(())
///     }
///
///     // Opt into the standard help presentation
///     fn output_help(&self, context: &mut CommandContext) -> Result<()> {
///         self.output_help_header(context);
///         Ok(())
///     }
/// }
/// ```
pub trait AnyCommand {
    /// Text displayed when help is requested
    ///
    /// An empty string is valid and suppresses the help body.
    fn help(&self) -> &str;

    /// Banner lines displayed above the help text
    fn ascii_header(&self) -> Option<Vec<String>> {
        None
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns whatever the command considers a failure. Callers receive the
    /// error unchanged.
    fn run(&self, context: &mut CommandContext) -> Result<()>;

    /// Print autocomplete candidates through the context's console
    ///
    /// Does nothing by default.
    fn output_auto_complete(&self, _context: &mut CommandContext) -> Result<()> {
        Ok(())
    }

    /// Print this command's help
    ///
    /// Does nothing by default. Override and call
    /// [`output_help_header`](Self::output_help_header) for the standard
    /// presentation, or print something custom.
    fn output_help(&self, _context: &mut CommandContext) -> Result<()> {
        Ok(())
    }

    /// Render the shell completion functions for this command and its descendants
    ///
    /// Must be pure: the same context snapshot and shell always give the same
    /// text. Returns an empty string by default.
    fn render_completion_functions(&self, _context: &CommandContext, _shell: Shell) -> String {
        String::new()
    }

    /// Sub-command registered under `identifier`
    ///
    /// Commands without sub-commands return `None`, the default.
    fn child(&self, _identifier: &str) -> Option<&dyn AnyCommand> {
        None
    }

    /// Print the standard help header (banner and help text)
    fn output_help_header(&self, context: &mut CommandContext) {
        let header = self.ascii_header();
        help::render_help_header(context.console(), header.as_deref(), self.help());
    }
}

impl<T: AnyCommand + ?Sized> AnyCommand for Box<T> {
    fn help(&self) -> &str {
        (**self).help()
    }

    fn ascii_header(&self) -> Option<Vec<String>> {
        (**self).ascii_header()
    }

    fn run(&self, context: &mut CommandContext) -> Result<()> {
        (**self).run(context)
    }

    fn output_auto_complete(&self, context: &mut CommandContext) -> Result<()> {
        (**self).output_auto_complete(context)
    }

    fn output_help(&self, context: &mut CommandContext) -> Result<()> {
        (**self).output_help(context)
    }

    fn render_completion_functions(&self, context: &CommandContext, shell: Shell) -> String {
        (**self).render_completion_functions(context, shell)
    }

    fn child(&self, identifier: &str) -> Option<&dyn AnyCommand> {
        (**self).child(identifier)
    }

    fn output_help_header(&self, context: &mut CommandContext) {
        (**self).output_help_header(context);
    }
}

/// Command built from a help text and a closure
///
/// Runs the closure and keeps every other capability inert.
///
/// ```rust
/// use cadre::command::FnCommand;
///
/// let greet = FnCommand::new("Print a greeting", |context| {
///     context.console().print("Hello, world!");
///     Ok(())
/// });
/// ```
pub struct FnCommand<F> {
    help: String,
    ascii_header: Option<Vec<String>>,
    run: F,
}

impl<F> FnCommand<F>
where
    F: Fn(&mut CommandContext) -> Result<()>,
{
    /// Create a command from its help text and behavior
    pub fn new(help: impl Into<String>, run: F) -> Self {
        Self {
            help: help.into(),
            ascii_header: None,
            run,
        }
    }

    /// Attach a banner
    #[must_use]
    pub fn with_ascii_header<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ascii_header = Some(lines.into_iter().map(Into::into).collect());
        self
    }
}

impl<F> AnyCommand for FnCommand<F>
where
    F: Fn(&mut CommandContext) -> Result<()>,
{
    fn help(&self) -> &str {
        &self.help
    }

    fn ascii_header(&self) -> Option<Vec<String>> {
        self.ascii_header.clone()
    }

    fn run(&self, context: &mut CommandContext) -> Result<()> {
        (self.run)(context)
    }
}

impl<F> std::fmt::Debug for FnCommand<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnCommand")
            .field("help", &self.help)
            .field("ascii_header", &self.ascii_header)
            .finish_non_exhaustive()
    }
}

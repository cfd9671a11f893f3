//! Completion for the `cadre` binary itself
//!
//! The binary's first word is one of its clap verbs, not a command of the
//! tree. [`Driver`] renders a root function offering those verbs and hangs
//! the tree's own functions under `run`:
//!
//! ```text
//! cadre <verb>                   verbs from the clap definition
//! cadre run <id> [<child>]       the command tree
//! cadre help|autocomplete <id>   top-level identifiers
//! cadre completions <shell>      bash zsh fish
//! ```

use cadre_core::Shell;
use clap::CommandFactory;

use crate::Cli;
use crate::command::AnyCommand;
use crate::completion::{self, CompletionEntry};
use crate::context::CommandContext;
use crate::error::Result;
use crate::group::CommandGroup;
use crate::help;

/// The `cadre` verbs wrapped around a command tree
#[derive(Debug)]
pub struct Driver<'a> {
    app: &'a CommandGroup,
}

impl<'a> Driver<'a> {
    /// Wrap a command tree
    pub fn new(app: &'a CommandGroup) -> Self {
        Self { app }
    }

    /// Verb names and descriptions, in clap's order
    pub fn verbs() -> Vec<(String, String)> {
        Cli::command()
            .get_subcommands()
            .map(|verb| {
                let about = verb.get_about().map(ToString::to_string).unwrap_or_default();
                (verb.get_name().to_string(), help::summary(&about).to_string())
            })
            .collect()
    }

    fn verb_functions(&self, verb: &str, context: &CommandContext, shell: Shell) -> String {
        match verb {
            "run" => self.app.render_completion_functions(context, shell),
            "help" | "autocomplete" => {
                let ids: Vec<&str> = self.app.commands().map(|(id, _)| id.as_str()).collect();
                completion::word_list_function(context, shell, &ids)
            }
            "completions" => {
                let shells = Shell::ALL.map(Shell::name);
                completion::word_list_function(context, shell, &shells)
            }
            _ => String::new(),
        }
    }
}

impl AnyCommand for Driver<'_> {
    fn help(&self) -> &str {
        self.app.help()
    }

    fn ascii_header(&self) -> Option<Vec<String>> {
        self.app.ascii_header()
    }

    fn run(&self, context: &mut CommandContext) -> Result<()> {
        self.app.run(context)
    }

    fn output_auto_complete(&self, context: &mut CommandContext) -> Result<()> {
        let verbs: Vec<String> = Self::verbs().into_iter().map(|(name, _)| name).collect();
        context.console().print(&verbs.join(" "));
        Ok(())
    }

    fn render_completion_functions(&self, context: &CommandContext, shell: Shell) -> String {
        let mut entries = Vec::new();
        let mut children = String::new();

        for (verb, description) in Self::verbs() {
            let sub_context = context.subcommand(&verb);
            let functions = self.verb_functions(&verb, &sub_context, shell);

            let function = (!functions.is_empty())
                .then(|| completion::function_name(sub_context.executable_path()));

            if !functions.is_empty() {
                if shell != Shell::Fish {
                    children.push('\n');
                }
                children.push_str(&functions);
            }

            entries.push(CompletionEntry {
                name: verb,
                description,
                function,
            });
        }

        let mut out = completion::group_function(context, shell, &entries);
        out.push_str(&children);
        out
    }
}

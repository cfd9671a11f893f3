//! Shell completion rendering
//!
//! Commands contribute completion *functions* through
//! [`AnyCommand::render_completion_functions`]; [`completion_script`] wraps the
//! functions of a root command into a script the shell can source.
//!
//! Every command's function is named after its executable path:
//! `cadre text upper` becomes `_cadre_text_upper`. Groups render a
//! dispatching function that offers their sub-command identifiers and hands
//! off to the functions of sub-commands that rendered one.
//!
//! Rendering is pure: nothing here touches the console or mutates the context.

use cadre_core::Shell;
use std::fmt::Write;

use crate::command::AnyCommand;
use crate::context::CommandContext;

/// A sub-command as seen by its group's completion function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionEntry {
    /// Identifier the sub-command is registered under
    pub name: String,
    /// One-line description (may be empty)
    pub description: String,
    /// Completion function to dispatch to, if the sub-command rendered one
    pub function: Option<String>,
}

/// Completion function name for an executable path
///
/// Characters that are not ASCII alphanumeric become `_`.
///
/// ```
/// use cadre::completion::function_name;
///
/// let path = ["cadre".to_string(), "word-count".to_string()];
/// assert_eq!(function_name(&path), "_cadre_word_count");
/// ```
pub fn function_name(path: &[String]) -> String {
    let mut name = String::new();
    for component in path {
        name.push('_');
        name.extend(
            component
                .chars()
                .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' }),
        );
    }
    name
}

/// Render a leaf completion function offering a fixed list of words
///
/// Typical words are a command's flags (`--port`) or fixed values.
pub fn word_list_function(context: &CommandContext, shell: Shell, words: &[&str]) -> String {
    let path = context.executable_path();
    let name = function_name(path);
    let mut out = String::new();

    match shell {
        Shell::Bash => {
            let words = words.iter().map(|w| bash_quote(w)).collect::<Vec<_>>();
            let _ = writeln!(out, "{name}() {{");
            let _ = writeln!(out, "    local cur=\"${{COMP_WORDS[COMP_CWORD]}}\"");
            let _ = writeln!(
                out,
                "    COMPREPLY=( $(compgen -W \"{}\" -- \"$cur\") )",
                words.join(" ")
            );
            out.push_str("}\n");
        }
        Shell::Zsh => {
            let words = words.iter().map(|w| single_quote(w)).collect::<Vec<_>>();
            let _ = writeln!(out, "{name}() {{");
            let _ = writeln!(out, "    compadd -- {}", words.join(" "));
            out.push_str("}\n");
        }
        Shell::Fish => {
            let words = words.iter().map(|w| fish_escape(w)).collect::<Vec<_>>();
            let _ = writeln!(
                out,
                "complete -c {}{} -f -a '{}'",
                fish_quote(program(path)),
                fish_condition(path, &[]),
                words.join(" ")
            );
        }
    }

    out
}

/// Render a group's dispatching completion function
///
/// `entries` are the group's sub-commands in registration order.
pub fn group_function(context: &CommandContext, shell: Shell, entries: &[CompletionEntry]) -> String {
    let path = context.executable_path();
    let name = function_name(path);
    let dispatch: Vec<(&str, &str)> = entries
        .iter()
        .filter_map(|e| e.function.as_deref().map(|f| (e.name.as_str(), f)))
        .collect();
    let mut out = String::new();

    match shell {
        Shell::Bash => {
            let words = entries
                .iter()
                .map(|e| e.name.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            let _ = writeln!(out, "{name}() {{");
            out.push_str("    local index=${1:-1}\n");
            out.push_str("    local cur=\"${COMP_WORDS[COMP_CWORD]}\"\n");
            out.push_str("    if [[ $COMP_CWORD -eq $index ]]; then\n");
            let _ = writeln!(out, "        COMPREPLY=( $(compgen -W \"{words}\" -- \"$cur\") )");
            out.push_str("        return\n");
            out.push_str("    fi\n");
            if !dispatch.is_empty() {
                out.push_str("    case \"${COMP_WORDS[$index]}\" in\n");
                for (command, function) in &dispatch {
                    let _ = writeln!(out, "        {command}) {function} $((index + 1)) ;;");
                }
                out.push_str("    esac\n");
            }
            out.push_str("}\n");
        }
        Shell::Zsh => {
            let _ = writeln!(out, "{name}() {{");
            out.push_str("    local curcontext=\"$curcontext\" state line\n");
            out.push_str("    local -a subcommands\n");
            out.push_str("    subcommands=(\n");
            for entry in entries {
                let item = if entry.description.is_empty() {
                    entry.name.clone()
                } else {
                    format!("{}:{}", entry.name, entry.description)
                };
                let _ = writeln!(out, "        {}", single_quote(&item));
            }
            out.push_str("    )\n");
            out.push_str("    _arguments -C '1: :->command' '*:: :->argument'\n");
            out.push_str("    case $state in\n");
            out.push_str("        command)\n");
            out.push_str("            _describe -t commands 'command' subcommands\n");
            out.push_str("            ;;\n");
            if !dispatch.is_empty() {
                out.push_str("        argument)\n");
                out.push_str("            case $words[1] in\n");
                for (command, function) in &dispatch {
                    let _ = writeln!(out, "                {command}) {function} ;;");
                }
                out.push_str("            esac\n");
                out.push_str("            ;;\n");
            }
            out.push_str("    esac\n");
            out.push_str("}\n");
        }
        Shell::Fish => {
            let siblings: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
            let condition = fish_condition(path, &siblings);
            for entry in entries {
                let _ = write!(
                    out,
                    "complete -c {}{condition} -f -a {}",
                    fish_quote(program(path)),
                    fish_quote(&entry.name)
                );
                if !entry.description.is_empty() {
                    let _ = write!(out, " -d {}", fish_quote(&entry.description));
                }
                out.push('\n');
            }
        }
    }

    out
}

/// Render a complete, sourceable completion script for a root command
///
/// The context's executable path must contain just the program name.
pub fn completion_script(root: &dyn AnyCommand, context: &CommandContext, shell: Shell) -> String {
    let program = program(context.executable_path()).to_string();
    let functions = root.render_completion_functions(context, shell);
    let entry = function_name(context.executable_path());
    let mut out = String::new();

    match shell {
        Shell::Bash => {
            let _ = writeln!(out, "# bash completion for {program}");
            if !functions.is_empty() {
                out.push('\n');
                out.push_str(&functions);
                out.push('\n');
                let _ = writeln!(out, "_{entry}_complete() {{");
                let _ = writeln!(out, "    {entry} 1");
                out.push_str("}\n");
                let _ = writeln!(out, "complete -F _{entry}_complete {program}");
            }
        }
        Shell::Zsh => {
            let _ = writeln!(out, "#compdef {program}");
            if !functions.is_empty() {
                out.push('\n');
                out.push_str(&functions);
                out.push('\n');
                let _ = writeln!(out, "{entry} \"$@\"");
            }
        }
        Shell::Fish => {
            let _ = writeln!(out, "# fish completion for {program}");
            if !functions.is_empty() {
                out.push('\n');
                out.push_str(&functions);
            }
        }
    }

    out
}

fn program(path: &[String]) -> &str {
    path.first().map_or("", String::as_str)
}

/// `-n` condition selecting where a fish directive applies
///
/// At the root: before any sub-command. Deeper: after the parent and the last
/// path component were typed and, for groups, before one of its own
/// sub-commands was. Keying on the parent keeps identifiers reused under
/// different groups apart.
fn fish_condition(path: &[String], children: &[&str]) -> String {
    let mut condition = match path {
        [] | [_] => return format!(" -n {}", fish_quote("__fish_use_subcommand")),
        [_, last] => format!("__fish_seen_subcommand_from {last}"),
        [_, .., parent, last] => format!(
            "__fish_seen_subcommand_from {parent}; and __fish_seen_subcommand_from {last}"
        ),
    };
    if !children.is_empty() {
        condition.push_str("; and not __fish_seen_subcommand_from ");
        condition.push_str(&children.join(" "));
    }
    format!(" -n {}", fish_quote(&condition))
}

fn single_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

fn bash_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '"' | '$' | '`' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn fish_escape(s: &str) -> String {
    s.replace('\\', r"\\").replace('\'', r"\'")
}

fn fish_quote(s: &str) -> String {
    format!("'{}'", fish_escape(s))
}

//! Tests for the command contract through the public API

#![allow(clippy::unwrap_used, clippy::panic)]

use cadre::command::{AnyCommand, FnCommand};
use cadre::context::{CommandContext, CommandInput};
use cadre::error::{CommandError, Result};
use cadre::group::CommandGroup;
use cadre::ui::BufferConsole;
use cadre_config::Config;
use cadre_core::{Identifier, Shell, to_snake_case};
use std::sync::Arc;

/// Command implementing only the required methods
struct Serve;

impl AnyCommand for Serve {
    fn help(&self) -> &str {
        "Start the server"
    }

    fn run(&self, context: &mut CommandContext) -> Result<()> {
        context.console().print("serving");
        Ok(())
    }
}

/// Command with banner and standard help presentation
struct Banner {
    help: &'static str,
    header: Option<Vec<String>>,
}

impl AnyCommand for Banner {
    fn help(&self) -> &str {
        self.help
    }

    fn ascii_header(&self) -> Option<Vec<String>> {
        self.header.clone()
    }

    fn run(&self, _context: &mut CommandContext) -> Result<()> {
        Ok(())
    }

    fn output_help(&self, context: &mut CommandContext) -> Result<()> {
        self.output_help_header(context);
        Ok(())
    }
}

fn context(console: &Arc<BufferConsole>) -> CommandContext {
    CommandContext::new(
        console.clone(),
        Arc::new(Config::default()),
        CommandInput::new("app", vec![]),
    )
}

#[test]
fn test_identifier_derivation_is_deterministic() {
    for name in ["serve", "UserCreate", "HTTPServer", "XMLHttpRequest", "Http2Server"] {
        assert_eq!(to_snake_case(name), to_snake_case(name));
        assert_eq!(
            Identifier::from_type_name(name).unwrap(),
            Identifier::from_type_name(name).unwrap()
        );
    }
}

#[test]
fn test_identifier_without_case_transitions() {
    assert_eq!(to_snake_case("serve"), "serve");
    assert_eq!(Identifier::from_type_name("Serve").unwrap().as_str(), "serve");
}

#[test]
fn test_identifier_camel_compound() {
    assert_eq!(to_snake_case("UserCreate"), "user_create");
}

#[test]
fn test_identifier_leading_acronym_collapses() {
    assert_eq!(to_snake_case("HTTPServer"), "http_server");
    assert_ne!(to_snake_case("HTTPServer"), "h_t_t_p_server");
}

#[test]
fn test_help_without_banner_or_text_prints_nothing() {
    let console = Arc::new(BufferConsole::new(40));
    let mut context = context(&console);

    let command = Banner {
        help: "",
        header: None,
    };
    command.output_help(&mut context).unwrap();

    assert!(console.lines().is_empty());
}

#[test]
fn test_help_with_banner_and_text_order() {
    let console = Arc::new(BufferConsole::new(12));
    let mut context = context(&console);

    let header = vec!["#####".to_string(), "# # #".to_string(), "#####".to_string()];
    let command = Banner {
        help: "wrapped help text here",
        header: Some(header.clone()),
    };
    command.output_help(&mut context).unwrap();

    let lines = console.lines();
    let n = header.len();

    assert_eq!(lines[0], "");
    for (i, banner_line) in header.iter().enumerate() {
        // (12 - 5) / 2 = 3
        assert_eq!(lines[1 + i], format!("   {banner_line}"));
    }
    assert_eq!(lines[n + 1], "");

    let help_lines = &lines[n + 2..lines.len() - 1];
    assert!(!help_lines.is_empty());
    assert!(help_lines.iter().all(|l| !l.trim().is_empty()));
    assert_eq!(
        help_lines
            .iter()
            .map(|l| l.trim())
            .collect::<Vec<_>>()
            .join(" "),
        "wrapped help text here"
    );
    assert_eq!(lines.last().unwrap(), "");
}

#[test]
fn test_minimal_command_defaults_are_no_ops() {
    let console = Arc::new(BufferConsole::new(40));
    let mut context = context(&console);

    Serve.output_auto_complete(&mut context).unwrap();
    Serve.output_help(&mut context).unwrap();
    assert!(Serve.ascii_header().is_none());
    assert!(console.lines().is_empty());

    Serve.run(&mut context).unwrap();
    assert_eq!(console.lines(), vec!["serving"]);
}

#[test]
fn test_default_completion_is_empty_for_every_shell_and_context() {
    let console = Arc::new(BufferConsole::new(40));
    let root = context(&console);
    let nested = root
        .subcommand("server")
        .subcommand("start")
        .with_arguments(vec!["--port".to_string()]);

    for context in [&root, &nested] {
        for shell in Shell::ALL {
            assert_eq!(Serve.render_completion_functions(context, shell), "");
            let closure = FnCommand::new("Closure", |_| Ok(()));
            assert_eq!(closure.render_completion_functions(context, shell), "");
        }
    }
}

#[test]
fn test_completion_rendering_is_idempotent() {
    let group = CommandGroup::builder()
        .help("Root")
        .command("serve", Serve)
        .command(
            "user",
            CommandGroup::builder()
                .help("Manage users")
                .command("create", FnCommand::new("Create a user", |_| Ok(())))
                .command("delete", FnCommand::new("Delete a user", |_| Ok(())))
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();

    let console = Arc::new(BufferConsole::new(40));
    let context = context(&console);

    for shell in Shell::ALL {
        let first = group.render_completion_functions(&context, shell);
        let second = group.render_completion_functions(&context, shell);
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }
    assert_eq!(context.executable_path(), ["app"]);
    assert!(console.lines().is_empty());
}

#[test]
fn test_run_errors_propagate_unchanged() {
    #[derive(Debug, thiserror::Error)]
    #[error("port {0} is taken")]
    struct PortTaken(u16);

    let group = CommandGroup::builder()
        .command(
            "serve",
            FnCommand::new("Start the server", |_| {
                Err(CommandError::failed(PortTaken(8080)))
            }),
        )
        .default_command("serve")
        .build()
        .unwrap();

    let console = Arc::new(BufferConsole::new(40));
    let mut context = context(&console);

    let err = group.run(&mut context).unwrap_err();
    let inner = err.as_failure().unwrap().downcast_ref::<PortTaken>().unwrap();
    assert_eq!(inner.0, 8080);
    assert_eq!(err.to_string(), "port 8080 is taken");
}

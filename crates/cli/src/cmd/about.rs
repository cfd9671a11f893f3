//! About command implementation
//!
//! Shows the application banner, help and version.

use crate::command::AnyCommand;
use crate::context::CommandContext;
use crate::error::Result;

/// Banner shared by the application and the about command
pub const BANNER: [&str; 4] = [
    r"  ___ __ _  __| |_ __ ___ ",
    r" / __/ _` |/ _` | '__/ _ \",
    r"| (_| (_| | (_| | | |  __/",
    r" \___\__,_|\__,_|_|  \___|",
];

/// Banner lines as owned strings
pub fn banner() -> Vec<String> {
    BANNER.iter().map(ToString::to_string).collect()
}

/// About command
#[derive(Debug, Default)]
pub struct AboutCommand;

impl AnyCommand for AboutCommand {
    fn help(&self) -> &str {
        "Show information about cadre.\n\
         cadre gives every command a uniform way to run, describe itself and \
         take part in shell completion."
    }

    fn ascii_header(&self) -> Option<Vec<String>> {
        Some(banner())
    }

    fn run(&self, context: &mut CommandContext) -> Result<()> {
        self.output_help_header(context);

        let console = context.console();
        for line in console.center(&format!("version {}", env!("CARGO_PKG_VERSION"))) {
            console.print(&line);
        }
        Ok(())
    }

    fn output_help(&self, context: &mut CommandContext) -> Result<()> {
        self.output_help_header(context);
        Ok(())
    }
}

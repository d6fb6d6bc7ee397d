//! `skycast completions <shell>`: print a completion script on stdout,
//! e.g. `skycast completions zsh > ~/.zfunc/_skycast`.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::{Cli, CompletionsArgs};
use crate::error::{Result, SkycastError};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }
}

/// Completion script for `shell`, generated from the clap definitions.
pub fn completion_script(shell: Shell) -> Result<String> {
    let mut cli = Cli::command();
    let bin = cli.get_name().to_string();
    let mut script = Vec::new();
    clap_complete::generate(shell, &mut cli, bin, &mut script);
    String::from_utf8(script).map_err(|e| SkycastError::Other(e.into()))
}

impl Command for CompletionsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.data(completion_script(self.args.shell)?.trim_end());
        Ok(CommandResult::success())
    }
}

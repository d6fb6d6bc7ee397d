//! Routing from parsed arguments to a command.

use crate::cli::args::{Cli, Commands, ShowArgs};
use crate::cli::context::AppContext;
use crate::error::Result;
use crate::ui::UserInterface;

use super::cache::CacheCommand;
use super::completions::CompletionsCommand;
use super::config::ConfigCommand;
use super::search::SearchCommand;
use super::show::ShowCommand;
use super::waybar::WaybarCommand;

/// One subcommand, ready to run.
///
/// Expected failures (an unknown city, a missing cache key) are reported
/// through `ui` and a non-zero [`CommandResult`]. `Err` is for everything
/// that should abort with the error printed by `main`.
pub trait Command {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Outcome of a command and the process exit code it maps to.
#[derive(Debug)]
pub struct CommandResult {
    pub success: bool,
    pub exit_code: i32,
}

impl CommandResult {
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Owns the [`AppContext`] and lends it to whichever command runs.
pub struct CommandDispatcher {
    context: AppContext,
}

impl CommandDispatcher {
    pub fn new(context: AppContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    /// Run the subcommand in `cli`. A bare `skycast` shows the default city.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = &self.context;
        let command: Box<dyn Command + '_> = match &cli.command {
            Some(Commands::Show(args)) => Box::new(ShowCommand::new(ctx, args.clone())),
            Some(Commands::Search(args)) => Box::new(SearchCommand::new(ctx, args.clone())),
            Some(Commands::Waybar) => Box::new(WaybarCommand::new(ctx)),
            Some(Commands::Config(args)) => Box::new(ConfigCommand::new(ctx, args.clone())),
            Some(Commands::Cache(args)) => Box::new(CacheCommand::new(ctx, args.clone())),
            Some(Commands::Completions(args)) => Box::new(CompletionsCommand::new(args.clone())),
            None => Box::new(ShowCommand::new(ctx, ShowArgs::default())),
        };
        command.execute(ui)
    }
}

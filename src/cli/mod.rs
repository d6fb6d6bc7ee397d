//! The `skycast` command line: clap definitions in [`args`], the loaded
//! settings and paths in [`context`], and one module per subcommand in
//! [`commands`].

pub mod args;
pub mod commands;
pub mod context;

pub use args::{Cli, Commands, CompletionsArgs, SearchArgs, ShowArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
pub use context::AppContext;

//! Subcommands. Each one is a [`Command`] borrowing the shared
//! [`AppContext`](crate::cli::AppContext); [`CommandDispatcher`] picks one.

pub mod cache;
pub mod completions;
pub mod config;
pub mod dispatcher;
pub mod search;
pub mod show;
pub mod waybar;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

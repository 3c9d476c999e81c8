//! Command-line interface.

pub mod args;
pub mod commands;

pub use args::{AddArgs, Cli, Commands, CompletionsArgs, InitArgs, UpdateArgs};
pub use commands::dispatcher::{Command, CommandDispatcher, CommandResult};

//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::templates::Category;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command against the given UI.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Init(args) => {
                let cmd = super::init::InitCommand::new(&self.project_root, args.clone());
                cmd.execute(ui)
            }
            Commands::Add(args) => {
                let cmd = super::add::AddCommand::new(
                    &self.project_root,
                    Category::Components,
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Commands::Hook(args) => {
                let cmd =
                    super::add::AddCommand::new(&self.project_root, Category::Hooks, args.clone());
                cmd.execute(ui)
            }
            Commands::Util(args) => {
                let cmd =
                    super::add::AddCommand::new(&self.project_root, Category::Utils, args.clone());
                cmd.execute(ui)
            }
            Commands::Provider(args) => {
                let cmd = super::add::AddCommand::new(
                    &self.project_root,
                    Category::Providers,
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Commands::Layout(args) => {
                let cmd = super::add::AddCommand::new(
                    &self.project_root,
                    Category::Layouts,
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Commands::Update(args) => {
                let cmd = super::update::UpdateCommand::new(&self.project_root, args.clone());
                cmd.execute(ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}

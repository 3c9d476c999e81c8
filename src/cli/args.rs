//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Glint - UI design-system template installer.
#[derive(Debug, Parser)]
#[command(name = "glint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show per-file copy output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialize Glint in this project (detect toolchain, write glint.json)
    Init(InitArgs),

    /// Add a component, or pick one interactively
    Add(AddArgs),

    /// Add a hook, or pick one interactively
    Hook(AddArgs),

    /// Add a utility file, or pick one interactively
    Util(AddArgs),

    /// Add a provider, or pick one interactively
    Provider(AddArgs),

    /// Add a layout, or pick one interactively
    Layout(AddArgs),

    /// Re-sync every installed artifact with the bundled templates
    Update(UpdateArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments shared by the add-family commands.
#[derive(Debug, Clone, clap::Args)]
pub struct AddArgs {
    /// Template name (prompts with a list when omitted)
    pub name: Option<String>,

    /// Overwrite the artifact if it is already installed
    #[arg(short, long)]
    pub replace: bool,
}

/// Arguments for the `init` command.
#[derive(Debug, Clone, clap::Args)]
pub struct InitArgs {
    /// Accept every detected value and prompt for nothing
    #[arg(long)]
    pub defaults: bool,
}

/// Arguments for the `update` command.
#[derive(Debug, Clone, clap::Args)]
pub struct UpdateArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

//! Interactive user interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - [`MockUI`] for tests
//!
//! The installer asks two kinds of questions: yes/no confirmations (before
//! mutating an existing config file, before a global update) and a single
//! selection from a template list (when an add-family command is given no
//! name). Everything else is one-way output.

pub mod mock;
pub mod non_interactive;
pub mod prompts;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use prompts::prompt_user;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, GlintTheme};

use crate::error::Result;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show all output including per-file copy logs.
    Verbose,
    /// Show progress and status only.
    #[default]
    Normal,
    /// Show nothing except errors.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Check if this mode shows per-file detail.
    pub fn shows_detail(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a per-file detail message (verbose mode only).
    fn detail(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a prompt and get user input.
    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult>;

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// A prompt to show to the user.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Unique key for the prompt (used by MockUI response lookup).
    pub key: String,
    /// The question to display.
    pub question: String,
    /// The type of prompt.
    pub prompt_type: PromptType,
}

/// The type of prompt.
#[derive(Debug, Clone)]
pub enum PromptType {
    /// Yes/no confirmation with a default answer.
    Confirm { default: bool },
    /// Select one from a list of options.
    Select { options: Vec<String> },
}

/// Result of a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResult {
    /// Boolean result from confirm.
    Bool(bool),
    /// String result from select.
    String(String),
}

impl PromptResult {
    /// Get as bool if this is a Bool result.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as string if this is a String result.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Ask a yes/no question.
pub fn confirm(
    ui: &mut dyn UserInterface,
    key: &str,
    question: &str,
    default: bool,
) -> Result<bool> {
    let result = ui.prompt(&Prompt {
        key: key.to_string(),
        question: question.to_string(),
        prompt_type: PromptType::Confirm { default },
    })?;
    Ok(result.as_bool().unwrap_or(default))
}

/// Ask the user to pick one of `options`.
pub fn select(
    ui: &mut dyn UserInterface,
    key: &str,
    question: &str,
    options: &[String],
) -> Result<String> {
    let result = ui.prompt(&Prompt {
        key: key.to_string(),
        question: question.to_string(),
        prompt_type: PromptType::Select {
            options: options.to_vec(),
        },
    })?;
    Ok(result.as_str().unwrap_or_default().to_string())
}

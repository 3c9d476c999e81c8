//! Non-interactive UI for CI/headless environments.
//!
//! Confirmations resolve to their default answer; selections cannot be
//! answered without a terminal and return an instructive error so the
//! caller can tell the user to pass a name explicitly.

use crate::error::{GlintError, Result};

use super::{OutputMode, Prompt, PromptResult, PromptType, UserInterface};

/// UI implementation for non-interactive mode.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn detail(&mut self, msg: &str) {
        if self.mode.shows_detail() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        match &prompt.prompt_type {
            PromptType::Confirm { default } => Ok(PromptResult::Bool(*default)),
            PromptType::Select { .. } => Err(GlintError::NonInteractive {
                prompt: prompt.key.clone(),
            }),
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

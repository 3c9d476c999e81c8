//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined prompt responses.
//!
//! # Example
//!
//! ```
//! use glint::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("proceed", "true");
//!
//! ui.message("Installing Button");
//! ui.success("Done!");
//!
//! assert!(ui.messages().contains(&"Installing Button".to_string()));
//! assert!(ui.successes().contains(&"Done!".to_string()));
//! ```

use std::collections::HashMap;

use crate::error::Result;

use super::{OutputMode, Prompt, PromptResult, PromptType, UserInterface};

/// Mock UI implementation for testing.
///
/// Captures all UI interactions and allows pre-configured prompt responses.
/// Prompt keys without a configured response fall back to the prompt's
/// default (confirms) or the first option (selects).
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    details: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    prompt_responses: HashMap<String, String>,
    prompts_shown: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a response for a prompt key.
    ///
    /// Confirm prompts parse the response as a boolean; select prompts
    /// return it verbatim.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.prompt_responses
            .insert(key.to_string(), response.to_string());
    }

    /// All plain messages shown.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// All detail messages shown.
    pub fn details(&self) -> &[String] {
        &self.details
    }

    /// All success messages shown.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// All warnings shown.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// All errors shown.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Keys of prompts that were shown, in order.
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn detail(&mut self, msg: &str) {
        self.details.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        self.prompts_shown.push(prompt.key.clone());

        let configured = self.prompt_responses.get(&prompt.key);
        match &prompt.prompt_type {
            PromptType::Confirm { default } => {
                let answer = configured
                    .map(|r| r == "true" || r == "y" || r == "yes")
                    .unwrap_or(*default);
                Ok(PromptResult::Bool(answer))
            }
            PromptType::Select { options } => {
                let choice = configured
                    .cloned()
                    .or_else(|| options.first().cloned())
                    .unwrap_or_default();
                Ok(PromptResult::String(choice))
            }
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined prompt responses.
//!
//! # Example
//!
//! ```
//! use ios_doctor::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("fix_it", "yes");
//!
//! // Use ui in code under test...
//! ui.message("### Diagnostic starting ###");
//! ui.show_check(true, "Xcode is installed at: /Applications/Xcode.app");
//!
//! // Assert on captured interactions
//! assert_eq!(ui.messages(), ["### Diagnostic starting ###"]);
//! assert!(ui.has_check(true, "Xcode is installed"));
//! ```

use std::collections::{HashMap, VecDeque};

use crate::error::Result;

use super::{OutputMode, Prompt, UserInterface};

/// Mock UI implementation for testing.
///
/// Captures all UI interactions and allows pre-configured prompt responses.
/// Supports both single responses (via `set_prompt_response`) and queued
/// responses (via `queue_prompt_responses`) for keys asked multiple times.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    checks: Vec<(bool, String)>,
    prompt_responses: HashMap<String, String>,
    prompt_queues: HashMap<String, VecDeque<String>>,
    prompts_shown: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::with_mode(OutputMode::Normal)
    }

    /// Create a MockUI that drops messages the way `mode` does.
    ///
    /// Notices are always captured.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Set a response for a prompt key.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.prompt_responses
            .insert(key.to_string(), response.to_string());
    }

    /// Queue multiple responses for the same prompt key.
    ///
    /// Responses are returned in order. After the queue is exhausted,
    /// falls back to `set_prompt_response` or the prompt default.
    pub fn queue_prompt_responses(&mut self, key: &str, responses: Vec<&str>) {
        let queue = responses.into_iter().map(|s| s.to_string()).collect();
        self.prompt_queues.insert(key.to_string(), queue);
    }

    /// Get all captured informational messages and notices, in order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured diagnosis lines as (ok, message).
    pub fn checks(&self) -> &[(bool, String)] {
        &self.checks
    }

    /// Get all prompts that were shown (by key).
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a diagnosis line with this outcome was shown.
    pub fn has_check(&self, ok: bool, msg: &str) -> bool {
        self.checks.iter().any(|(o, m)| *o == ok && m.contains(msg))
    }

    /// Clear all captured interactions.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.warnings.clear();
        self.errors.clear();
        self.checks.clear();
        self.prompts_shown.clear();
    }

    fn next_response(&mut self, key: &str) -> Option<String> {
        if let Some(queue) = self.prompt_queues.get_mut(key) {
            if let Some(response) = queue.pop_front() {
                return Some(response);
            }
        }
        self.prompt_responses.get(key).cloned()
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_messages() {
            self.messages.push(msg.to_string());
        }
    }

    fn notice(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_check(&mut self, ok: bool, msg: &str) {
        self.checks.push((ok, msg.to_string()));
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        self.prompts_shown.push(prompt.key.clone());

        Ok(self
            .next_response(&prompt.key)
            .or_else(|| prompt.default.clone())
            .unwrap_or_default())
    }
}

//! Non-interactive UI for CI/headless environments.

use std::collections::HashMap;

use crate::error::{DoctorError, Result};

use super::theme::DoctorTheme;
use super::{OutputMode, Prompt, UserInterface};

/// Prefix of environment variables that answer prompts by key.
pub const PROMPT_ENV_PREFIX: &str = "IOS_DOCTOR_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Prompts are answered from `IOS_DOCTOR_PROMPT_<KEY>` environment variables,
/// then from the prompt default.
pub struct NonInteractiveUI {
    mode: OutputMode,
    theme: DoctorTheme,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self::with_overrides(mode, env_overrides)
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            theme: DoctorTheme::plain(),
            env_overrides: overrides,
        }
    }

    fn answer_for(&self, prompt: &Prompt) -> Option<String> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        self.env_overrides
            .get(&env_key)
            .cloned()
            .or_else(|| prompt.default.clone())
    }
}

impl UserInterface for NonInteractiveUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_messages() {
            println!("{}", msg);
        }
    }

    fn notice(&mut self, msg: &str) {
        if self.mode.shows_messages() {
            println!("{}", msg);
        } else {
            eprintln!("{}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("{}", self.theme.format_warning(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn show_check(&mut self, ok: bool, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_check(ok, msg));
        }
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        let Some(answer) = self.answer_for(prompt) else {
            return Err(DoctorError::PromptUnavailable {
                key: prompt.key.clone(),
            });
        };

        if self.mode.shows_messages() {
            println!("{} {}", prompt.question, answer);
        }

        Ok(answer)
    }
}

//! Interactive user interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - [`MockUI`] for capturing output in tests
//! - [`FixSession`], the fix-confirmation prompter shared by all checks
//!
//! # Example
//!
//! ```
//! use ios_doctor::ui::{create_ui, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.message("Everything looks good, bye!");
//! ui.notice("The authorize iOS script need to be run.");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompter;
pub mod prompts;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use prompter::{FixAnswer, FixSession, FIX_IT_KEY};
pub use prompts::prompt_user;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, DoctorTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display an informational message to the user.
    fn message(&mut self, msg: &str);

    /// Announce an action about to be taken on the machine.
    ///
    /// Unlike [`message`](Self::message) this is never dropped; modes that
    /// hide messages send it to stderr instead.
    fn notice(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Display the outcome of a single diagnosis.
    fn show_check(&mut self, ok: bool, msg: &str);

    /// Show a prompt and return the value of the chosen option.
    fn prompt(&mut self, prompt: &Prompt) -> Result<String>;
}

/// A select prompt to show to the user.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Unique key for the prompt (used for lookup and env overrides).
    pub key: String,
    /// The question to display.
    pub question: String,
    /// The choices offered.
    pub options: Vec<PromptOption>,
    /// Default value if user just presses enter.
    pub default: Option<String>,
}

/// An option in a select prompt.
#[derive(Debug, Clone)]
pub struct PromptOption {
    /// Display label.
    pub label: String,
    /// Value returned when selected.
    pub value: String,
}

impl PromptOption {
    /// Option whose label and value are the same word.
    pub fn plain(value: &str) -> Self {
        Self {
            label: value.to_string(),
            value: value.to_string(),
        }
    }
}

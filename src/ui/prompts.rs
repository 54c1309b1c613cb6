//! Interactive prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;

use crate::error::{DoctorError, Result};

use super::{Prompt, PromptOption};

/// Convert dialoguer errors to DoctorError.
fn map_dialoguer_err(e: dialoguer::Error) -> DoctorError {
    DoctorError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Prompt the user to pick one option, returning its value.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<String> {
    let labels: Vec<_> = prompt.options.iter().map(|o| o.label.as_str()).collect();

    let default_idx = default_index(prompt.default.as_deref(), &prompt.options);

    let selection = Select::with_theme(&prompt_theme())
        .with_prompt(&prompt.question)
        .items(&labels)
        .default(default_idx)
        .interact_on(term)
        .map_err(map_dialoguer_err)?;

    Ok(prompt.options[selection].value.clone())
}

fn default_index(default: Option<&str>, options: &[PromptOption]) -> usize {
    default
        .and_then(|d| options.iter().position(|o| o.value == d))
        .unwrap_or(0)
}

/// Whether a free-form answer means "yes".
pub fn parse_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "true" | "yes" | "y" | "1"
    )
}

//! Fix confirmation.
//!
//! Every fix that changes the machine asks first. The answer is normalized
//! to [`FixAnswer`]; choosing `always` or `never` answers every later fix
//! prompt of the same session without asking again.

use serde::Serialize;

use crate::error::Result;

use super::prompts::parse_affirmative;
use super::{Prompt, PromptOption, UserInterface};

/// Prompt key for fix confirmations (env override: `IOS_DOCTOR_PROMPT_FIX_IT`).
pub const FIX_IT_KEY: &str = "fix_it";

/// Normalized answer to "Fix it?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FixAnswer {
    Yes,
    No,
}

impl FixAnswer {
    /// The answer as the token shown to users.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }
}

/// UI access for a sequence of fixes, remembering sticky answers.
pub struct FixSession<'a> {
    ui: &'a mut dyn UserInterface,
    remembered: Option<FixAnswer>,
}

impl<'a> FixSession<'a> {
    /// Start a session that asks before each fix.
    pub fn new(ui: &'a mut dyn UserInterface) -> Self {
        Self {
            ui,
            remembered: None,
        }
    }

    /// Start a session that answers every fix prompt with `answer`.
    pub fn with_answer(ui: &'a mut dyn UserInterface, answer: FixAnswer) -> Self {
        Self {
            ui,
            remembered: Some(answer),
        }
    }

    /// The underlying UI.
    pub fn ui(&mut self) -> &mut dyn UserInterface {
        &mut *self.ui
    }

    /// Emit an informational line.
    pub fn info(&mut self, msg: &str) {
        self.ui.message(msg);
    }

    /// Announce the action a fix is about to take, or the manual step left
    /// after declining it. Shown in every output mode.
    pub fn announce(&mut self, msg: &str) {
        self.ui.notice(msg);
    }

    /// The sticky answer, if `always`/`never` was chosen.
    pub fn remembered(&self) -> Option<FixAnswer> {
        self.remembered
    }

    /// Ask whether to apply the fix that was just described.
    pub fn fix_it(&mut self) -> Result<FixAnswer> {
        if let Some(answer) = self.remembered {
            tracing::debug!("answering fix prompt with remembered '{}'", answer.as_str());
            return Ok(answer);
        }

        let prompt = Prompt {
            key: FIX_IT_KEY.to_string(),
            question: "Fix it:".to_string(),
            options: ["yes", "no", "always", "never"]
                .into_iter()
                .map(PromptOption::plain)
                .collect(),
            default: Some("no".to_string()),
        };

        let reply = self.ui.prompt(&prompt)?;
        let answer = match reply.trim().to_lowercase().as_str() {
            "always" => {
                self.remembered = Some(FixAnswer::Yes);
                FixAnswer::Yes
            }
            "never" => {
                self.remembered = Some(FixAnswer::No);
                FixAnswer::No
            }
            other if parse_affirmative(other) => FixAnswer::Yes,
            _ => FixAnswer::No,
        };

        tracing::debug!("fix prompt answered '{}'", answer.as_str());
        Ok(answer)
    }
}

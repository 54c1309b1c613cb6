//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use crate::error::Result;

use super::{
    prompt_user, should_use_colors, DoctorTheme, NonInteractiveUI, OutputMode, Prompt,
    UserInterface,
};

/// Interactive terminal UI implementation.
///
/// Output goes to stdout; prompts and the notices that precede them are drawn
/// on stderr so stdout stays clean for `--json`.
pub struct TerminalUI {
    term: Term,
    prompt_term: Term,
    theme: DoctorTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            DoctorTheme::new()
        } else {
            DoctorTheme::plain()
        };

        Self {
            term: Term::stdout(),
            prompt_term: Term::stderr(),
            theme,
            mode,
        }
    }

    fn notice_term(&self) -> &Term {
        if self.mode.shows_messages() {
            &self.term
        } else {
            &self.prompt_term
        }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_messages() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn notice(&mut self, msg: &str) {
        let mut term = self.notice_term();
        writeln!(term, "{}", msg).ok();
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_check(&mut self, ok: bool, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_check(ok, msg)).ok();
        }
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        prompt_user(prompt, &self.prompt_term)
    }
}

/// Create the appropriate UI based on context.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stderr().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}

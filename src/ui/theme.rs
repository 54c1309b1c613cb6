//! Visual theme and styling.

use console::Style;

/// ios-doctor's visual theme.
#[derive(Debug, Clone)]
pub struct DoctorTheme {
    /// Style for passing checks (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for failing checks and error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
}

impl DoctorTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
        }
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a diagnosis line: only the mark is colored.
    pub fn format_check(&self, ok: bool, msg: &str) -> String {
        if ok {
            format!(" {} {}", self.success.apply_to("✔"), msg)
        } else {
            format!(" {} {}", self.error.apply_to("✖"), msg)
        }
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_warning() {
        let msg = DoctorTheme::plain().format_warning("Caution");
        assert_eq!(msg, "⚠ Caution");
    }

    #[test]
    fn theme_formats_error() {
        let msg = DoctorTheme::plain().format_error("Failed");
        assert_eq!(msg, "✗ Failed");
    }

    #[test]
    fn theme_formats_passing_check() {
        let msg = DoctorTheme::plain().format_check(true, "DevToolsSecurity is enabled.");
        assert_eq!(msg, " ✔ DevToolsSecurity is enabled.");
    }

    #[test]
    fn theme_formats_failing_check() {
        let msg = DoctorTheme::plain().format_check(false, "Carthage was NOT found!");
        assert_eq!(msg, " ✖ Carthage was NOT found!");
    }
}

//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show all output including debug-level detail.
    Verbose,
    /// Show progress and status.
    #[default]
    Normal,
    /// Show minimal output (diagnoses + final status).
    Quiet,
    /// Show nothing except errors.
    Silent,
}

impl OutputMode {
    /// Check if this mode shows informational messages.
    pub fn shows_messages(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows status lines (diagnoses, warnings).
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Silent)
    }
}

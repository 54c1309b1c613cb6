//! Environment checks.
//!
//! Each check verifies one property of the machine and may offer a remedy:
//!
//! - [`Check::diagnose`] probes the machine and always produces a
//!   [`CheckResult`]; probe failures become `ok: false`, never errors
//! - [`Check::fix`] applies or describes the remedy. Declined fixes fail with
//!   [`DoctorError::FixSkipped`](crate::error::DoctorError::FixSkipped);
//!   collaborator failures propagate unchanged
//!
//! Checks are stateless. Everything they touch arrives through
//! [`CheckContext`].

pub mod carthage;
pub mod security;
pub mod xcode;

pub use carthage::CarthageCheck;
pub use security::{authorize_ios_fix, AuthorizationDbCheck, DevToolsSecurityCheck};
pub use xcode::{XcodeCheck, XcodeCmdLineToolsCheck};

use serde::Serialize;

use crate::config::Settings;
use crate::detection::ToolDetector;
use crate::error::Result;
use crate::sys::{OsVersion, System};
use crate::ui::FixSession;

/// Outcome of a diagnosis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    /// Whether the property holds.
    pub ok: bool,

    /// Sentence describing what was observed.
    pub message: String,
}

impl CheckResult {
    /// A passing result.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    /// A failing result.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }

    /// Pick the pass or fail message for `ok`.
    pub fn from_bool(ok: bool, passed: &str, failed: &str) -> Self {
        if ok {
            Self::ok(passed)
        } else {
            Self::fail(failed)
        }
    }
}

/// Collaborators available to checks.
#[derive(Clone, Copy)]
pub struct CheckContext<'a> {
    /// Process, filesystem and OS probes.
    pub system: &'a dyn System,

    /// Locates the Carthage executable.
    pub carthage: &'a dyn ToolDetector,

    /// Thresholds and paths.
    pub settings: &'a Settings,
}

impl<'a> CheckContext<'a> {
    /// Bundle collaborators for a run.
    pub fn new(
        system: &'a dyn System,
        carthage: &'a dyn ToolDetector,
        settings: &'a Settings,
    ) -> Self {
        Self {
            system,
            carthage,
            settings,
        }
    }

    /// Whether the host OS predates `legacy_os_threshold`.
    pub fn is_legacy_os(&self) -> Result<bool> {
        let raw = self.system.os_version()?;
        let version: OsVersion = raw.parse().map_err(|e: String| anyhow::anyhow!(e))?;
        Ok(self.settings.is_legacy_os(&version))
    }
}

/// One environment property and its remedy.
pub trait Check {
    /// Stable identifier, used by `--skip` and `list`.
    fn id(&self) -> &'static str;

    /// Short description of what is verified.
    fn description(&self) -> &'static str;

    /// Whether [`fix`](Check::fix) remedies the problem itself. When false,
    /// `fix` only returns instructions for the user.
    fn autofix(&self) -> bool;

    /// Probe the machine. Never fails.
    fn diagnose(&self, ctx: &CheckContext<'_>) -> CheckResult;

    /// Apply the remedy, or return manual instructions.
    fn fix(&self, ctx: &CheckContext<'_>, session: &mut FixSession<'_>) -> Result<String>;
}

/// The iOS checks in run order.
pub fn ios_checks() -> Vec<Box<dyn Check>> {
    vec![
        Box::new(XcodeCheck),
        Box::new(XcodeCmdLineToolsCheck),
        Box::new(DevToolsSecurityCheck),
        Box::new(AuthorizationDbCheck),
        Box::new(CarthageCheck),
    ]
}

/// The iOS checks minus those whose id is in `skip`.
pub fn ios_checks_without(skip: &[String]) -> Vec<Box<dyn Check>> {
    ios_checks()
        .into_iter()
        .filter(|check| {
            let skipped = skip.iter().any(|id| id == check.id());
            if skipped {
                tracing::debug!("skipping check '{}'", check.id());
            }
            !skipped
        })
        .collect()
}

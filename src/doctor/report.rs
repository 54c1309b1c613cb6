//! Outcomes of a doctor run.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::checks::CheckResult;

/// Diagnosis of a single check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosedCheck {
    /// Check id.
    pub id: String,
    /// Whether the check can remedy itself.
    pub autofix: bool,
    /// What was observed.
    #[serde(flatten)]
    pub result: CheckResult,
}

/// Result of diagnosing every configured check, in run order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiagnosticReport {
    pub checks: Vec<DiagnosedCheck>,
}

impl DiagnosticReport {
    /// Checks that did not pass.
    pub fn failing(&self) -> impl Iterator<Item = &DiagnosedCheck> {
        self.checks.iter().filter(|c| !c.result.ok)
    }

    /// Number of checks that need a fix.
    pub fn fixes_needed(&self) -> usize {
        self.failing().count()
    }

    /// Whether every check passed.
    pub fn all_ok(&self) -> bool {
        self.fixes_needed() == 0
    }
}

/// Instructions for a problem the user has to solve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManualFix {
    pub id: String,
    pub instructions: String,
}

/// How an automatic fix ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FixOutcome {
    /// Fix ran and the check now passes.
    Applied,
    /// Fix ran but the check still fails.
    Unresolved,
    /// User declined.
    Skipped,
    /// Fix errored.
    Failed { error: String },
}

impl FixOutcome {
    /// Whether the problem is gone.
    pub fn is_applied(&self) -> bool {
        matches!(self, FixOutcome::Applied)
    }
}

/// An automatic fix attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixRecord {
    pub id: String,
    #[serde(flatten)]
    pub outcome: FixOutcome,
}

/// Full record of a doctor run.
#[derive(Debug, Clone, Serialize)]
pub struct DoctorReport {
    /// When the run started.
    pub timestamp: DateTime<Utc>,
    /// Diagnosis before any fix.
    pub diagnosis: DiagnosticReport,
    /// Fixes left to the user.
    pub manual_fixes: Vec<ManualFix>,
    /// Automatic fixes, in run order.
    pub fixes: Vec<FixRecord>,
    /// Whether fixing was attempted at all.
    pub fix_attempted: bool,
}

impl DoctorReport {
    /// A report with only a diagnosis.
    pub fn diagnosed(timestamp: DateTime<Utc>, diagnosis: DiagnosticReport) -> Self {
        Self {
            timestamp,
            diagnosis,
            manual_fixes: Vec::new(),
            fixes: Vec::new(),
            fix_attempted: false,
        }
    }

    /// Whether the machine ended up healthy.
    ///
    /// True when every check passed, or when fixes were attempted, no manual
    /// fix is pending and every automatic fix was applied.
    pub fn success(&self) -> bool {
        if self.diagnosis.all_ok() {
            return true;
        }
        self.fix_attempted
            && self.manual_fixes.is_empty()
            && self.fixes.iter().all(|f| f.outcome.is_applied())
    }
}

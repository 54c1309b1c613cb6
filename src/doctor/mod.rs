//! Report aggregation.
//!
//! [`Doctor`] runs in two phases. It first diagnoses every check in order.
//! It then walks the failing ones: checks without an automatic remedy are
//! collected as manual instructions, the rest are fixed one at a time and
//! re-diagnosed. Each fix completes before the next one starts.

pub mod report;

pub use report::{
    DiagnosedCheck, DiagnosticReport, DoctorReport, FixOutcome, FixRecord, ManualFix,
};

use chrono::Utc;

use crate::checks::{ios_checks_without, Check, CheckContext};
use crate::ui::{FixSession, UserInterface};

/// Closing line when nothing is left to do.
pub const ALL_GOOD: &str = "Everything looks good, bye!";

/// Closing line when problems remain.
pub const COME_BACK: &str = "Bye! Run ios-doctor again when all manual fixes have been applied!";

/// Runs a list of checks and their fixes.
pub struct Doctor {
    checks: Vec<Box<dyn Check>>,
}

impl Doctor {
    /// Doctor over the given checks, run in this order.
    pub fn new(checks: Vec<Box<dyn Check>>) -> Self {
        Self { checks }
    }

    /// Doctor over the iOS checks, minus `skip`.
    pub fn ios(skip: &[String]) -> Self {
        Self::new(ios_checks_without(skip))
    }

    /// Diagnose every check and print one line per check.
    pub fn diagnose(
        &self,
        ctx: &CheckContext<'_>,
        ui: &mut dyn UserInterface,
    ) -> DiagnosticReport {
        ui.message("### Diagnostic starting ###");

        let mut report = DiagnosticReport::default();
        for check in &self.checks {
            let result = check.diagnose(ctx);
            tracing::debug!("{}: ok={}", check.id(), result.ok);
            ui.show_check(result.ok, &result.message);
            report.checks.push(DiagnosedCheck {
                id: check.id().to_string(),
                autofix: check.autofix(),
                result,
            });
        }

        let needed = report.fixes_needed();
        ui.message(&format!(
            "### Diagnostic completed, {} {} needed. ###",
            needed,
            if needed == 1 { "fix" } else { "fixes" }
        ));
        report
    }

    /// Diagnose, then fix what can be fixed.
    ///
    /// With `fix` false the run stops after the diagnosis.
    pub fn run(
        &self,
        ctx: &CheckContext<'_>,
        session: &mut FixSession<'_>,
        fix: bool,
    ) -> DoctorReport {
        let timestamp = Utc::now();
        let diagnosis = self.diagnose(ctx, session.ui());
        let mut report = DoctorReport::diagnosed(timestamp, diagnosis);

        if report.diagnosis.all_ok() {
            session.info(ALL_GOOD);
            return report;
        }
        if !fix {
            return report;
        }
        report.fix_attempted = true;

        let failing: Vec<&dyn Check> = self
            .checks
            .iter()
            .zip(&report.diagnosis.checks)
            .filter(|(_, d)| !d.result.ok)
            .map(|(c, _)| c.as_ref())
            .collect();

        report.manual_fixes = self.manual_fixes(ctx, session, &failing);

        for check in failing.iter().filter(|c| c.autofix()) {
            let diagnosed = report
                .diagnosis
                .checks
                .iter()
                .find(|d| d.id == check.id());
            let message = diagnosed.map(|d| d.result.message.as_str()).unwrap_or("");
            let outcome = self.apply_fix(*check, message, ctx, session);
            report.fixes.push(FixRecord {
                id: check.id().to_string(),
                outcome,
            });
        }

        if report.success() {
            session.info(ALL_GOOD);
        } else {
            session.info(COME_BACK);
        }
        report
    }

    fn manual_fixes(
        &self,
        ctx: &CheckContext<'_>,
        session: &mut FixSession<'_>,
        failing: &[&dyn Check],
    ) -> Vec<ManualFix> {
        let mut fixes = Vec::new();
        for check in failing.iter().filter(|c| !c.autofix()) {
            match check.fix(ctx, session) {
                Ok(instructions) => fixes.push(ManualFix {
                    id: check.id().to_string(),
                    instructions,
                }),
                Err(e) => {
                    tracing::warn!("no instructions for '{}': {}", check.id(), e);
                    session.ui().warning(&e.to_string());
                }
            }
        }

        if !fixes.is_empty() {
            session.info("### Manual Fixes Needed ###");
            session.info(
                "The configuration cannot be automatically fixed, please do the following first:",
            );
            for fix in &fixes {
                session.info(&format!("- {}", fix.instructions));
            }
            session.info("###");
        }
        fixes
    }

    fn apply_fix(
        &self,
        check: &dyn Check,
        message: &str,
        ctx: &CheckContext<'_>,
        session: &mut FixSession<'_>,
    ) -> FixOutcome {
        session.info(&format!("### Fixing: {} ###", message));

        match check.fix(ctx, session) {
            Ok(_) => {
                let after = check.diagnose(ctx);
                session.ui().show_check(after.ok, &after.message);
                if after.ok {
                    session.info("### Fix was successfully applied ###");
                    FixOutcome::Applied
                } else {
                    session.info("### Fix was applied but issue remains ###");
                    FixOutcome::Unresolved
                }
            }
            Err(e) if e.is_fix_skipped() => {
                session.info("### Skipped fix ###");
                FixOutcome::Skipped
            }
            Err(e) => {
                tracing::debug!("fix for '{}' failed: {:?}", check.id(), e);
                session.ui().warning(&e.to_string());
                session.info("### Fix did not succeed ###");
                FixOutcome::Failed {
                    error: e.to_string(),
                }
            }
        }
    }
}

//! Developer security settings: DevToolsSecurity and the authorization
//! database right that lets debuggers attach to processes.

use super::{Check, CheckContext, CheckResult};
use crate::error::{DoctorError, Result};
use crate::ui::{FixAnswer, FixSession};

/// Prints `<word> enabled` when developer mode is on, e.g.
/// "Developer mode is currently enabled." becomes `Developer enabled`.
const DEV_TOOLS_STATUS: &str = "DevToolsSecurity -status | awk '{gsub(/\\./, \"\", $NF); print $1, $NF}'";

/// Prints `rule is-developer` when the taskport right requires developer
/// membership, and exits non-zero otherwise.
const TASKPORT_RULE: &str = "security authorizationdb read system.privilege.taskport 2>/dev/null \
     | grep -q is-developer && echo 'rule is-developer'";

/// Keys that must appear, in this order, in a legacy authorization file
/// granting root access to the taskport right.
const LEGACY_TASKPORT_PATTERN: &[&str] = &["system.privilege.taskport", "allow-root", "true"];

/// Offer to run the privileged authorization routine.
///
/// Shared by every check whose remedy is enabling developer access.
pub fn authorize_ios_fix(ctx: &CheckContext<'_>, session: &mut FixSession<'_>) -> Result<()> {
    session.announce("The authorize iOS script need to be run.");

    if session.fix_it()? != FixAnswer::Yes {
        session.announce("Skipping you will need to run the authorize iOS manually.");
        return Err(DoctorError::FixSkipped);
    }

    ctx.system.authorize()
}

/// Whether `content` contains every pattern, each after the previous one.
fn contains_in_order(content: &str, patterns: &[&str]) -> bool {
    let mut rest = content;
    for pattern in patterns {
        match rest.find(pattern) {
            Some(idx) => rest = &rest[idx + pattern.len()..],
            None => return false,
        }
    }
    true
}

/// Developer mode must be enabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct DevToolsSecurityCheck;

impl Check for DevToolsSecurityCheck {
    fn id(&self) -> &'static str {
        "dev-tools-security"
    }

    fn description(&self) -> &'static str {
        "DevToolsSecurity (developer mode) is enabled"
    }

    fn autofix(&self) -> bool {
        true
    }

    fn diagnose(&self, ctx: &CheckContext<'_>) -> CheckResult {
        let enabled = match ctx.system.exec("sh", &["-c", DEV_TOOLS_STATUS]) {
            Ok(out) => out.second_token() == Some("enabled"),
            Err(e) => {
                tracing::debug!("DevToolsSecurity status failed: {}", e);
                false
            }
        };

        CheckResult::from_bool(
            enabled,
            "DevToolsSecurity is enabled.",
            "DevToolsSecurity is NOT enabled!",
        )
    }

    fn fix(&self, ctx: &CheckContext<'_>, session: &mut FixSession<'_>) -> Result<String> {
        authorize_ios_fix(ctx, session)?;
        Ok(String::new())
    }
}

/// The `system.privilege.taskport` right must be granted to developers.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthorizationDbCheck;

impl AuthorizationDbCheck {
    fn legacy_file_grants_taskport(ctx: &CheckContext<'_>) -> bool {
        match ctx.is_legacy_os() {
            Ok(true) => {}
            Ok(false) => return false,
            Err(e) => {
                tracing::debug!("OS version unknown: {}", e);
                return false;
            }
        }

        let path = &ctx.settings.authorization_db_path;
        match ctx.system.read_text_file(path) {
            Ok(content) => contains_in_order(&content, LEGACY_TASKPORT_PATTERN),
            Err(e) => {
                tracing::debug!("cannot read {}: {}", path.display(), e);
                false
            }
        }
    }
}

impl Check for AuthorizationDbCheck {
    fn id(&self) -> &'static str {
        "authorization-db"
    }

    fn description(&self) -> &'static str {
        "The authorization database lets developers debug processes"
    }

    fn autofix(&self) -> bool {
        true
    }

    fn diagnose(&self, ctx: &CheckContext<'_>) -> CheckResult {
        let set_up = match ctx.system.exec("sh", &["-c", TASKPORT_RULE]) {
            Ok(out) => out.second_token() == Some("is-developer"),
            Err(e) => {
                tracing::debug!("authorizationdb read failed: {}", e);
                Self::legacy_file_grants_taskport(ctx)
            }
        };

        CheckResult::from_bool(
            set_up,
            "The Authorization DB is set up properly.",
            "The Authorization DB is NOT set up properly.",
        )
    }

    fn fix(&self, ctx: &CheckContext<'_>, session: &mut FixSession<'_>) -> Result<String> {
        authorize_ios_fix(ctx, session)?;
        Ok(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::detection::StaticDetector;
    use crate::sys::{MockExec, MockSystem};
    use crate::ui::{MockUI, FIX_IT_KEY};
    use std::path::PathBuf;

    const LEGACY_AUTH: &str =
        "<key>system.privilege.taskport</key> \n <dict>\n <key>allow-root</key>\n <true/>";

    fn diagnose(check: &dyn Check, sys: &MockSystem) -> CheckResult {
        let settings = Settings::default();
        let carthage = StaticDetector::missing();
        check.diagnose(&CheckContext::new(sys, &carthage, &settings))
    }

    fn with_session<T>(
        sys: &MockSystem,
        ui: &mut MockUI,
        f: impl FnOnce(&CheckContext<'_>, &mut FixSession<'_>) -> T,
    ) -> T {
        let settings = Settings::default();
        let carthage = StaticDetector::missing();
        let ctx = CheckContext::new(sys, &carthage, &settings);
        let mut session = FixSession::new(ui);
        f(&ctx, &mut session)
    }

    #[test]
    fn authorize_fix_yes_authorizes_once() {
        let sys = MockSystem::new();
        let mut ui = MockUI::new();
        ui.set_prompt_response(FIX_IT_KEY, "yes");

        with_session(&sys, &mut ui, authorize_ios_fix).unwrap();

        assert_eq!(sys.authorize_calls(), 1);
        assert_eq!(ui.messages(), ["The authorize iOS script need to be run."]);
    }

    #[test]
    fn authorize_fix_no_is_skipped() {
        let sys = MockSystem::new();
        let mut ui = MockUI::new();
        ui.set_prompt_response(FIX_IT_KEY, "no");

        let err = with_session(&sys, &mut ui, authorize_ios_fix).unwrap_err();

        assert!(err.is_fix_skipped());
        assert_eq!(sys.authorize_calls(), 0);
        assert_eq!(
            ui.messages(),
            [
                "The authorize iOS script need to be run.",
                "Skipping you will need to run the authorize iOS manually.",
            ]
        );
    }

    #[test]
    fn authorize_failure_propagates() {
        let sys = MockSystem::new().with_failing_authorize();
        let mut ui = MockUI::new();
        ui.set_prompt_response(FIX_IT_KEY, "yes");

        let err = with_session(&sys, &mut ui, authorize_ios_fix).unwrap_err();

        assert!(matches!(err, DoctorError::CommandFailed { .. }));
        assert_eq!(ui.messages().len(), 1);
    }

    #[test]
    fn dev_tools_security_is_autofixable() {
        assert!(DevToolsSecurityCheck.autofix());
    }

    #[test]
    fn dev_tools_security_enabled() {
        let sys = MockSystem::new().with_exec(MockExec::stdout("1234 enabled\n"));
        assert_eq!(
            diagnose(&DevToolsSecurityCheck, &sys),
            CheckResult::ok("DevToolsSecurity is enabled.")
        );
        assert_eq!(sys.exec_calls().len(), 1);
    }

    #[test]
    fn dev_tools_security_probe_failure() {
        let sys = MockSystem::new().with_exec(MockExec::fail());
        assert_eq!(
            diagnose(&DevToolsSecurityCheck, &sys),
            CheckResult::fail("DevToolsSecurity is NOT enabled!")
        );
    }

    #[test]
    fn dev_tools_security_disabled() {
        let sys = MockSystem::new().with_exec(MockExec::stdout("1234 abcd\n"));
        assert_eq!(
            diagnose(&DevToolsSecurityCheck, &sys),
            CheckResult::fail("DevToolsSecurity is NOT enabled!")
        );
    }

    #[test]
    fn dev_tools_security_fix_delegates_to_authorize() {
        let sys = MockSystem::new();
        let mut ui = MockUI::new();
        ui.set_prompt_response(FIX_IT_KEY, "yes");

        with_session(&sys, &mut ui, |ctx, session| {
            DevToolsSecurityCheck.fix(ctx, session)
        })
        .unwrap();

        assert_eq!(sys.authorize_calls(), 1);
        assert_eq!(ui.messages(), ["The authorize iOS script need to be run."]);
    }

    #[test]
    fn dev_tools_security_fix_declined() {
        let sys = MockSystem::new();
        let mut ui = MockUI::new();
        ui.set_prompt_response(FIX_IT_KEY, "no");

        let err = with_session(&sys, &mut ui, |ctx, session| {
            DevToolsSecurityCheck.fix(ctx, session)
        })
        .unwrap_err();

        assert!(err.is_fix_skipped());
        assert_eq!(sys.authorize_calls(), 0);
        assert!(ui.has_message("Skipping you will need to run the authorize iOS manually."));
    }

    #[test]
    fn authorization_db_is_autofixable() {
        assert!(AuthorizationDbCheck.autofix());
    }

    #[test]
    fn authorization_db_rule_is_developer() {
        let sys = MockSystem::new().with_exec(MockExec::stdout("1234 is-developer\n"));
        assert_eq!(
            diagnose(&AuthorizationDbCheck, &sys),
            CheckResult::ok("The Authorization DB is set up properly.")
        );
        assert_eq!(sys.os_version_calls(), 0);
        assert!(sys.read_calls().is_empty());
    }

    #[test]
    fn authorization_db_wrong_rule_does_not_fall_back() {
        let sys = MockSystem::new()
            .with_exec(MockExec::stdout("1234 abcd\n"))
            .with_os_version("10.8")
            .with_file("/etc/authorization", LEGACY_AUTH);
        assert_eq!(
            diagnose(&AuthorizationDbCheck, &sys),
            CheckResult::fail("The Authorization DB is NOT set up properly.")
        );
        assert_eq!(sys.os_version_calls(), 0);
        assert!(sys.read_calls().is_empty());
    }

    #[test]
    fn authorization_db_legacy_file_grants_access() {
        let sys = MockSystem::new()
            .with_exec(MockExec::fail())
            .with_os_version("10.8")
            .with_file("/etc/authorization", LEGACY_AUTH);
        assert_eq!(
            diagnose(&AuthorizationDbCheck, &sys),
            CheckResult::ok("The Authorization DB is set up properly.")
        );
        assert_eq!(sys.os_version_calls(), 1);
        assert_eq!(sys.read_calls(), vec![PathBuf::from("/etc/authorization")]);
    }

    #[test]
    fn authorization_db_modern_os_skips_legacy_file() {
        let sys = MockSystem::new()
            .with_exec(MockExec::fail())
            .with_os_version("10.10")
            .with_file("/etc/authorization", LEGACY_AUTH);
        assert_eq!(
            diagnose(&AuthorizationDbCheck, &sys),
            CheckResult::fail("The Authorization DB is NOT set up properly.")
        );
        assert_eq!(sys.os_version_calls(), 1);
        assert!(sys.read_calls().is_empty());
    }

    #[test]
    fn authorization_db_legacy_empty_file() {
        let sys = MockSystem::new()
            .with_exec(MockExec::fail())
            .with_os_version("10.8")
            .with_file("/etc/authorization", "");
        assert_eq!(
            diagnose(&AuthorizationDbCheck, &sys),
            CheckResult::fail("The Authorization DB is NOT set up properly.")
        );
    }

    #[test]
    fn authorization_db_legacy_unreadable_file() {
        let sys = MockSystem::new()
            .with_exec(MockExec::fail())
            .with_os_version("10.8");
        assert!(!diagnose(&AuthorizationDbCheck, &sys).ok);
        assert_eq!(sys.read_calls().len(), 1);
    }

    #[test]
    fn authorization_db_unknown_os_fails() {
        let sys = MockSystem::new().with_exec(MockExec::fail());
        assert!(!diagnose(&AuthorizationDbCheck, &sys).ok);
        assert!(sys.read_calls().is_empty());
    }

    #[test]
    fn authorization_db_fix_declined() {
        let sys = MockSystem::new();
        let mut ui = MockUI::new();
        ui.set_prompt_response(FIX_IT_KEY, "no");

        let err = with_session(&sys, &mut ui, |ctx, session| {
            AuthorizationDbCheck.fix(ctx, session)
        })
        .unwrap_err();

        assert!(err.is_fix_skipped());
        assert_eq!(sys.authorize_calls(), 0);
    }

    #[test]
    fn pattern_must_appear_in_order() {
        assert!(contains_in_order(LEGACY_AUTH, LEGACY_TASKPORT_PATTERN));
        assert!(!contains_in_order(
            "<true/> <key>allow-root</key> <key>system.privilege.taskport</key>",
            LEGACY_TASKPORT_PATTERN
        ));
        assert!(!contains_in_order(
            "<key>system.privilege.taskport</key> <key>allow-root</key>",
            LEGACY_TASKPORT_PATTERN
        ));
    }

    #[test]
    fn pattern_need_not_be_adjacent() {
        assert!(contains_in_order(
            "system.privilege.taskport ... lots ... allow-root ... more ... true",
            LEGACY_TASKPORT_PATTERN
        ));
    }
}

//! Carthage dependency manager.

use super::{Check, CheckContext, CheckResult};
use crate::error::Result;
use crate::ui::FixSession;

/// Carthage must be installed.
#[derive(Debug, Clone, Copy, Default)]
pub struct CarthageCheck;

impl Check for CarthageCheck {
    fn id(&self) -> &'static str {
        "carthage"
    }

    fn description(&self) -> &'static str {
        "Carthage is installed"
    }

    fn autofix(&self) -> bool {
        false
    }

    fn diagnose(&self, ctx: &CheckContext<'_>) -> CheckResult {
        match ctx.carthage.detect() {
            Some(path) => CheckResult::ok(format!("Carthage was found at: {}", path.display())),
            None => CheckResult::fail("Carthage was NOT found!"),
        }
    }

    fn fix(&self, _ctx: &CheckContext<'_>, _session: &mut FixSession<'_>) -> Result<String> {
        Ok("Please install Carthage. Visit https://github.com/Carthage/Carthage#installing-carthage for more information.".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::detection::{PathDetector, StaticDetector, ToolDetector};
    use crate::sys::MockSystem;
    use crate::ui::MockUI;

    fn diagnose_with(detector: &dyn ToolDetector) -> CheckResult {
        let sys = MockSystem::new();
        let settings = Settings::default();
        CarthageCheck.diagnose(&CheckContext::new(&sys, detector, &settings))
    }

    #[test]
    fn not_autofixable() {
        assert!(!CarthageCheck.autofix());
    }

    #[test]
    fn found() {
        let detector = StaticDetector::found("/usr/local/bin/carthage");
        assert_eq!(
            diagnose_with(&detector),
            CheckResult::ok("Carthage was found at: /usr/local/bin/carthage")
        );
    }

    #[test]
    fn not_found() {
        assert_eq!(
            diagnose_with(&StaticDetector::missing()),
            CheckResult::fail("Carthage was NOT found!")
        );
    }

    #[cfg(unix)]
    #[test]
    fn found_through_path_detector() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::TempDir::new().unwrap();
        let bin = temp.path().join("carthage");
        std::fs::write(&bin, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&bin, std::fs::Permissions::from_mode(0o755)).unwrap();

        let detector = PathDetector::with_search_path("carthage", vec![], vec![bin.clone()]);
        let result = diagnose_with(&detector);
        assert!(result.ok);
        assert!(result.message.contains(&bin.display().to_string()));
    }

    #[test]
    fn fix_points_to_install_docs() {
        let sys = MockSystem::new();
        let settings = Settings::default();
        let detector = StaticDetector::missing();
        let ctx = CheckContext::new(&sys, &detector, &settings);
        let mut ui = MockUI::new();
        let mut session = FixSession::new(&mut ui);

        let text = CarthageCheck.fix(&ctx, &mut session).unwrap();

        assert_eq!(
            text,
            "Please install Carthage. Visit https://github.com/Carthage/Carthage#installing-carthage for more information."
        );
        drop(session);
        assert!(ui.prompts_shown().is_empty());
    }
}

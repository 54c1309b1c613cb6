//! Xcode and its command line tools.

use std::path::Path;

use super::{Check, CheckContext, CheckResult};
use crate::error::{DoctorError, Result};
use crate::sys::display_command;
use crate::ui::{FixAnswer, FixSession};

/// Package receipt of the command line tools before `legacy_os_threshold`.
const LEGACY_CLT_PACKAGE: &str = "com.apple.pkg.DeveloperToolsCLI";

/// Package receipt of the command line tools from `legacy_os_threshold` on.
const CLT_PACKAGE: &str = "com.apple.pkg.CLTools_Executables";

/// Marker printed by the receipt probe when the package is installed.
const INSTALL_TIME: &str = "install-time";

const CLT_INSTALL: (&str, &[&str]) = ("xcode-select", &["--install"]);

/// Xcode must be installed and selected.
#[derive(Debug, Clone, Copy, Default)]
pub struct XcodeCheck;

impl Check for XcodeCheck {
    fn id(&self) -> &'static str {
        "xcode"
    }

    fn description(&self) -> &'static str {
        "Xcode is installed and its developer directory exists"
    }

    fn autofix(&self) -> bool {
        false
    }

    fn diagnose(&self, ctx: &CheckContext<'_>) -> CheckResult {
        let path = match ctx.system.exec("xcode-select", &["-p"]) {
            Ok(out) => out.stdout.trim_end().to_string(),
            Err(e) => {
                tracing::debug!("xcode-select -p failed: {}", e);
                return CheckResult::fail("Xcode is NOT installed!");
            }
        };

        if ctx.system.path_exists(Path::new(&path)) {
            CheckResult::ok(format!("Xcode is installed at: {}", path))
        } else {
            CheckResult::fail(format!("Xcode cannot be found at '{}'!", path))
        }
    }

    fn fix(&self, _ctx: &CheckContext<'_>, _session: &mut FixSession<'_>) -> Result<String> {
        Ok("Manually install Xcode.".to_string())
    }
}

/// The Xcode command line tools package must be installed.
#[derive(Debug, Clone, Copy, Default)]
pub struct XcodeCmdLineToolsCheck;

impl XcodeCmdLineToolsCheck {
    /// Shell pipeline printing `<install time> install-time` for an
    /// installed package receipt, and nothing otherwise.
    fn receipt_probe(package: &str) -> String {
        format!(
            "pkgutil --pkg-info={} | sed -n 's/^\\({}\\): \\(.*\\)$/\\2 \\1/p'",
            package, INSTALL_TIME
        )
    }

    fn package(ctx: &CheckContext<'_>) -> &'static str {
        match ctx.is_legacy_os() {
            Ok(true) => LEGACY_CLT_PACKAGE,
            Ok(false) => CLT_PACKAGE,
            Err(e) => {
                tracing::debug!("OS version unknown, assuming current receipts: {}", e);
                CLT_PACKAGE
            }
        }
    }
}

impl Check for XcodeCmdLineToolsCheck {
    fn id(&self) -> &'static str {
        "xcode-cli-tools"
    }

    fn description(&self) -> &'static str {
        "Xcode Command Line Tools are installed"
    }

    fn autofix(&self) -> bool {
        true
    }

    fn diagnose(&self, ctx: &CheckContext<'_>) -> CheckResult {
        let probe = Self::receipt_probe(Self::package(ctx));

        let installed = match ctx.system.exec("sh", &["-c", &probe]) {
            Ok(out) => out.second_token() == Some(INSTALL_TIME),
            Err(e) => {
                tracing::debug!("package receipt probe failed: {}", e);
                false
            }
        };

        CheckResult::from_bool(
            installed,
            "Xcode Command Line Tools are installed.",
            "Xcode Command Line Tools are NOT installed!",
        )
    }

    fn fix(&self, ctx: &CheckContext<'_>, session: &mut FixSession<'_>) -> Result<String> {
        let (program, args) = CLT_INSTALL;
        session.announce(&format!(
            "The following command need be executed: {}",
            display_command(program, args)
        ));

        if session.fix_it()? != FixAnswer::Yes {
            session.announce("Skipping you will need to install Xcode manually.");
            return Err(DoctorError::FixSkipped);
        }

        ctx.system.exec(program, args)?;
        Ok(String::new())
    }
}

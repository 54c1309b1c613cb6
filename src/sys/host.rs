//! The real machine.

use super::command::{display_command, execute, CommandOptions, CommandOutput};
use super::{is_elevated, System};
use crate::error::Result;
use std::path::Path;

/// Commands run by the privileged authorization routine, in order.
const AUTHORIZE_COMMANDS: &[&[&str]] = &[
    &["DevToolsSecurity", "--enable"],
    &[
        "security",
        "authorizationdb",
        "write",
        "system.privilege.taskport",
        "is-developer",
    ],
];

/// [`System`] backed by the host's processes and filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostSystem;

impl HostSystem {
    /// Create a host system handle.
    pub fn new() -> Self {
        Self
    }
}

impl System for HostSystem {
    fn exec(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        tracing::debug!("exec: {}", display_command(program, args));
        // Probes parse English output.
        let options = CommandOptions {
            env: vec![("LC_ALL".to_string(), "C".to_string())],
            ..Default::default()
        };
        execute(program, args, &options)
    }

    fn path_exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_text_file(&self, path: &Path) -> Result<String> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn os_version(&self) -> Result<String> {
        let out = self.exec("sw_vers", &["-productVersion"])?;
        Ok(out.stdout.trim().to_string())
    }

    fn authorize(&self) -> Result<()> {
        let options = CommandOptions {
            interactive: true,
            ..Default::default()
        };
        let elevated = is_elevated();

        for argv in AUTHORIZE_COMMANDS {
            if elevated {
                execute(argv[0], &argv[1..], &options)?;
            } else {
                execute("sudo", argv, &options)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn path_exists_reflects_filesystem() {
        let temp = TempDir::new().unwrap();
        let sys = HostSystem::new();
        assert!(sys.path_exists(temp.path()));
        assert!(!sys.path_exists(&temp.path().join("missing")));
    }

    #[test]
    fn read_text_file_returns_content() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("authorization");
        fs::write(&file, "<key>allow-root</key>").unwrap();
        let sys = HostSystem::new();
        assert_eq!(sys.read_text_file(&file).unwrap(), "<key>allow-root</key>");
    }

    #[test]
    fn read_text_file_missing_is_io_error() {
        let temp = TempDir::new().unwrap();
        let sys = HostSystem::new();
        let err = sys
            .read_text_file(&temp.path().join("nope"))
            .unwrap_err();
        assert!(matches!(err, crate::error::DoctorError::Io(_)));
    }

    #[cfg(unix)]
    #[test]
    fn exec_runs_in_c_locale() {
        let out = HostSystem::new()
            .exec("sh", &["-c", "echo $LC_ALL"])
            .unwrap();
        assert_eq!(out.stdout.trim(), "C");
    }

    #[test]
    fn authorize_commands_grant_taskport_to_developers() {
        assert_eq!(AUTHORIZE_COMMANDS[0], &["DevToolsSecurity", "--enable"]);
        assert!(AUTHORIZE_COMMANDS[1].contains(&"system.privilege.taskport"));
        assert!(AUTHORIZE_COMMANDS[1].contains(&"is-developer"));
    }
}

//! System collaborators: process execution, filesystem probes, OS version
//! detection and the privileged authorization routine.
//!
//! Checks never touch the host directly. They go through the [`System`]
//! trait so tests can swap in [`MockSystem`] with scripted responses.

pub mod command;
pub mod host;
pub mod mock;
pub mod version;

pub use command::{display_command, execute, CommandOptions, CommandOutput};
pub use host::HostSystem;
pub use mock::{MockExec, MockSystem};
pub use version::OsVersion;

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Read-only probes and mutating commands the checks rely on.
pub trait System {
    /// Run a program; non-zero exit or spawn failure is an error.
    fn exec(&self, program: &str, args: &[&str]) -> Result<CommandOutput>;

    /// Whether a filesystem path exists.
    fn path_exists(&self, path: &Path) -> bool;

    /// Read a file as UTF-8 text.
    fn read_text_file(&self, path: &Path) -> Result<String>;

    /// The macOS product version, e.g. `10.10`.
    fn os_version(&self) -> Result<String>;

    /// Run the privileged authorization routine (developer mode plus the
    /// `system.privilege.taskport` right).
    fn authorize(&self) -> Result<()>;
}

/// The current user's home directory, from `$HOME`.
pub fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
}

/// Check if running in a CI environment.
///
/// Checks common CI environment variables: `CI`, `GITHUB_ACTIONS`,
/// `GITLAB_CI`, `CIRCLECI`, `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}

/// Check if running as root.
pub fn is_elevated() -> bool {
    #[cfg(unix)]
    {
        // SAFETY: geteuid() is a simple syscall that returns the effective user ID
        unsafe { libc::geteuid() == 0 }
    }

    #[cfg(not(unix))]
    {
        false
    }
}

//! Scripted [`System`] for testing.
//!
//! `MockSystem` answers each collaborator call from pre-configured responses
//! and records every call for later assertion.
//!
//! # Example
//!
//! ```
//! use ios_doctor::sys::{MockExec, MockSystem, System};
//!
//! let sys = MockSystem::new().with_exec(MockExec::stdout("/Applications/Xcode.app\n"));
//! let out = sys.exec("xcode-select", &["-p"]).unwrap();
//! assert_eq!(out.stdout.trim(), "/Applications/Xcode.app");
//! assert_eq!(sys.exec_calls(), vec!["xcode-select -p".to_string()]);
//! ```

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet, VecDeque};
use std::path::{Path, PathBuf};

use super::command::{display_command, CommandOutput};
use super::System;
use crate::error::{DoctorError, Result};

/// One scripted answer to an `exec` call.
#[derive(Debug, Clone)]
pub enum MockExec {
    /// The command succeeds with this stdout.
    Stdout(String),
    /// The command fails with this exit code.
    Fail(i32),
}

impl MockExec {
    /// Successful command printing `stdout`.
    pub fn stdout(stdout: impl Into<String>) -> Self {
        Self::Stdout(stdout.into())
    }

    /// Failing command (exit code 1).
    pub fn fail() -> Self {
        Self::Fail(1)
    }
}

/// Mock system implementation for testing.
///
/// `exec` responses are consumed in order. Running out of responses fails
/// the call, which also makes unexpected commands visible in assertions.
#[derive(Debug, Default)]
pub struct MockSystem {
    exec_queue: RefCell<VecDeque<MockExec>>,
    exec_calls: RefCell<Vec<String>>,
    existing: HashSet<PathBuf>,
    exists_calls: Cell<usize>,
    files: HashMap<PathBuf, String>,
    read_calls: RefCell<Vec<PathBuf>>,
    os_version: Option<String>,
    os_version_calls: Cell<usize>,
    authorize_fails: bool,
    authorize_calls: Cell<usize>,
}

impl MockSystem {
    /// Create an empty mock: every exec fails, nothing exists.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for the next `exec` call.
    pub fn with_exec(self, response: MockExec) -> Self {
        self.exec_queue.borrow_mut().push_back(response);
        self
    }

    /// Mark a path as existing.
    pub fn with_existing(mut self, path: impl Into<PathBuf>) -> Self {
        self.existing.insert(path.into());
        self
    }

    /// Provide file content for `read_text_file`.
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }

    /// Set the reported OS version.
    pub fn with_os_version(mut self, version: &str) -> Self {
        self.os_version = Some(version.to_string());
        self
    }

    /// Make the authorization routine fail.
    pub fn with_failing_authorize(mut self) -> Self {
        self.authorize_fails = true;
        self
    }

    /// Every command line passed to `exec`, in order.
    pub fn exec_calls(&self) -> Vec<String> {
        self.exec_calls.borrow().clone()
    }

    /// Number of `path_exists` probes.
    pub fn exists_calls(&self) -> usize {
        self.exists_calls.get()
    }

    /// Every path passed to `read_text_file`, in order.
    pub fn read_calls(&self) -> Vec<PathBuf> {
        self.read_calls.borrow().clone()
    }

    /// Number of `os_version` queries.
    pub fn os_version_calls(&self) -> usize {
        self.os_version_calls.get()
    }

    /// Number of `authorize` invocations.
    pub fn authorize_calls(&self) -> usize {
        self.authorize_calls.get()
    }
}

impl System for MockSystem {
    fn exec(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        let rendered = display_command(program, args);
        self.exec_calls.borrow_mut().push(rendered.clone());

        match self.exec_queue.borrow_mut().pop_front() {
            Some(MockExec::Stdout(stdout)) => Ok(CommandOutput::stdout(stdout)),
            Some(MockExec::Fail(code)) => Err(DoctorError::CommandFailed {
                command: rendered,
                code: Some(code),
                stderr: "Something wrong!".to_string(),
            }),
            None => Err(DoctorError::CommandFailed {
                command: rendered,
                code: None,
                stderr: "no scripted response".to_string(),
            }),
        }
    }

    fn path_exists(&self, path: &Path) -> bool {
        self.exists_calls.set(self.exists_calls.get() + 1);
        self.existing.contains(path)
    }

    fn read_text_file(&self, path: &Path) -> Result<String> {
        self.read_calls.borrow_mut().push(path.to_path_buf());
        self.files.get(path).cloned().ok_or_else(|| {
            DoctorError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            ))
        })
    }

    fn os_version(&self) -> Result<String> {
        self.os_version_calls.set(self.os_version_calls.get() + 1);
        self.os_version
            .clone()
            .ok_or_else(|| anyhow::anyhow!("sw_vers unavailable").into())
    }

    fn authorize(&self) -> Result<()> {
        self.authorize_calls.set(self.authorize_calls.get() + 1);
        if self.authorize_fails {
            Err(DoctorError::CommandFailed {
                command: "sudo DevToolsSecurity --enable".to_string(),
                code: Some(1),
                stderr: "Sorry, try again.".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

//! Tool installation detection.
//!
//! A detector locates an external tool's executable among known
//! candidates. Checks depend on the [`ToolDetector`] trait so tests can
//! substitute a fixed answer.

pub mod tool;

pub use tool::{is_executable, parse_system_path, resolve_tool_path, PathDetector};

use std::path::PathBuf;

/// Locates an installed tool.
pub trait ToolDetector {
    /// Path of the first usable installation, if any.
    fn detect(&self) -> Option<PathBuf>;
}

/// Detector with a fixed answer, for tests and dry runs.
#[derive(Debug, Clone)]
pub struct StaticDetector {
    path: Option<PathBuf>,
}

impl StaticDetector {
    /// A detector that always finds the tool at `path`.
    pub fn found(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// A detector that never finds the tool.
    pub fn missing() -> Self {
        Self { path: None }
    }
}

impl ToolDetector for StaticDetector {
    fn detect(&self) -> Option<PathBuf> {
        self.path.clone()
    }
}

//! PATH and candidate-location lookup for tool binaries.

use std::path::{Path, PathBuf};

use super::ToolDetector;

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable. Does NOT use
/// the `which` command, whose behavior varies across systems.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    path_entries
        .iter()
        .map(|dir| dir.join(tool))
        .find(|candidate| is_usable(candidate))
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

fn is_usable(candidate: &Path) -> bool {
    candidate.is_file() && is_executable(candidate)
}

/// Finds a tool on PATH first, then at well-known install locations.
#[derive(Debug, Clone)]
pub struct PathDetector {
    tool: String,
    search_path: Vec<PathBuf>,
    candidates: Vec<PathBuf>,
}

impl PathDetector {
    /// Detector searching the process PATH, then `candidates`.
    pub fn new(tool: &str, candidates: Vec<PathBuf>) -> Self {
        Self::with_search_path(tool, parse_system_path(), candidates)
    }

    /// Detector with an explicit search path.
    ///
    /// This allows testing without modifying the actual PATH.
    pub fn with_search_path(tool: &str, search_path: Vec<PathBuf>, candidates: Vec<PathBuf>) -> Self {
        Self {
            tool: tool.to_string(),
            search_path,
            candidates,
        }
    }
}

impl ToolDetector for PathDetector {
    fn detect(&self) -> Option<PathBuf> {
        if let Some(found) = resolve_tool_path(&self.tool, &self.search_path) {
            tracing::debug!("{} found on PATH at {}", self.tool, found.display());
            return Some(found);
        }

        let found = self.candidates.iter().find(|c| is_usable(c)).cloned();
        match &found {
            Some(path) => tracing::debug!("{} found at {}", self.tool, path.display()),
            None => tracing::debug!(
                "{} not found on PATH or in {} known locations",
                self.tool,
                self.candidates.len()
            ),
        }
        found
    }
}

//! Settings schema.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::sys::OsVersion;

/// Tunables for the checks and the doctor run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// OS versions strictly below this use the legacy probes (legacy
    /// authorization database file, legacy command line tools receipt).
    pub legacy_os_threshold: OsVersion,

    /// Legacy authorization database consulted below the threshold.
    pub authorization_db_path: PathBuf,

    /// Known Carthage install locations, checked after PATH.
    pub carthage_paths: Vec<PathBuf>,

    /// Check ids to leave out of a run.
    pub skip: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            legacy_os_threshold: OsVersion::new(10, 9),
            authorization_db_path: PathBuf::from("/etc/authorization"),
            carthage_paths: vec![
                PathBuf::from("/usr/local/bin/carthage"),
                PathBuf::from("/opt/homebrew/bin/carthage"),
            ],
            skip: Vec::new(),
        }
    }
}

impl Settings {
    /// Whether `version` predates the configured threshold.
    pub fn is_legacy_os(&self, version: &OsVersion) -> bool {
        version < &self.legacy_os_threshold
    }
}

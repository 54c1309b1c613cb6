//! Settings file discovery and loading.

use crate::config::merger::merge_configs;
use crate::config::schema::Settings;
use crate::error::{DoctorError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding settings files, under home or the project root.
const CONFIG_DIR: &str = ".ios-doctor";
const CONFIG_FILE: &str = "config.yml";

/// Paths to settings files in priority order (later overrides earlier).
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// User's global settings: ~/.ios-doctor/config.yml
    pub user_global: Option<PathBuf>,

    /// Project settings: .ios-doctor/config.yml
    pub project: Option<PathBuf>,

    /// Explicit `--config` path; must exist.
    pub explicit: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover settings files for the given project root.
    pub fn discover(project_root: &Path, explicit: Option<&Path>) -> Self {
        Self {
            user_global: crate::sys::home_dir().and_then(|home| existing(&home)),
            project: existing(project_root),
            explicit: explicit.map(Path::to_path_buf),
        }
    }

    /// Returns all settings paths in merge order.
    pub fn all(&self) -> Vec<&PathBuf> {
        [&self.user_global, &self.project, &self.explicit]
            .into_iter()
            .flatten()
            .collect()
    }
}

fn existing(root: &Path) -> Option<PathBuf> {
    let path = root.join(CONFIG_DIR).join(CONFIG_FILE);
    path.exists().then_some(path)
}

/// Parse YAML content into [`Settings`].
///
/// `source_path` is used only for error reporting.
pub fn parse_settings(content: &str, source_path: &Path) -> Result<Settings> {
    let value = parse_value(content, source_path)?;
    from_value(merge_configs(&[value]), source_path)
}

/// Load and merge every discovered settings file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if an explicit path doesn't exist.
/// Returns `ConfigParseError` if any file is invalid.
pub fn load_settings(project_root: &Path, explicit: Option<&Path>) -> Result<Settings> {
    let paths = ConfigPaths::discover(project_root, explicit);

    let mut layers = Vec::new();
    for path in paths.all() {
        tracing::debug!("loading settings from {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DoctorError::ConfigNotFound { path: path.clone() }
            } else {
                DoctorError::Io(e)
            }
        })?;
        layers.push(parse_value(&content, path)?);
    }

    let source = paths
        .all()
        .last()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| project_root.join(CONFIG_DIR).join(CONFIG_FILE));
    from_value(merge_configs(&layers), &source)
}

fn parse_value(content: &str, path: &Path) -> Result<serde_yaml::Value> {
    let value: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| DoctorError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    // An empty file is an empty layer.
    if value.is_null() {
        Ok(serde_yaml::Value::Mapping(Default::default()))
    } else {
        Ok(value)
    }
}

fn from_value(value: serde_yaml::Value, path: &Path) -> Result<Settings> {
    serde_yaml::from_value(value).map_err(|e| DoctorError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

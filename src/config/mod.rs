//! Settings loading for ios-doctor.
//!
//! Settings are optional YAML files layered in priority order:
//!
//! 1. User global (`~/.ios-doctor/config.yml`)
//! 2. Project (`.ios-doctor/config.yml` under the working directory)
//! 3. An explicit `--config <path>`
//!
//! Later files override earlier ones key by key. With no files at all,
//! [`Settings::default`] applies.
//!
//! # Example
//!
//! ```
//! use ios_doctor::config::parse_settings;
//! use std::path::Path;
//!
//! let settings = parse_settings("legacy_os_threshold: \"10.9\"", Path::new("inline.yml")).unwrap();
//! assert_eq!(settings.legacy_os_threshold.to_string(), "10.9");
//! ```

pub mod loader;
pub mod merger;
pub mod schema;

pub use loader::{load_settings, parse_settings, ConfigPaths};
pub use merger::{deep_merge, merge_configs};
pub use schema::Settings;

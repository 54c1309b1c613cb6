//! ios-doctor - Verify that a Mac can build and run iOS automation.
//!
//! The doctor runs a fixed set of environment checks (Xcode, its command
//! line tools, DevToolsSecurity, the authorization database, Carthage),
//! reports each outcome, and offers a fix for whatever is broken.
//!
//! # Modules
//!
//! - [`checks`] - The checks and the Check/Fix protocol
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Settings discovery and merging
//! - [`detection`] - Locating installed tools
//! - [`doctor`] - Running checks and aggregating a report
//! - [`error`] - Error types and result aliases
//! - [`sys`] - Process execution, filesystem and OS probes
//! - [`ui`] - Terminal output and fix prompts
//!
//! # Example
//!
//! ```
//! use ios_doctor::checks::{CheckContext, XcodeCheck};
//! use ios_doctor::config::Settings;
//! use ios_doctor::detection::StaticDetector;
//! use ios_doctor::doctor::Doctor;
//! use ios_doctor::sys::{MockExec, MockSystem};
//! use ios_doctor::ui::{FixSession, MockUI};
//!
//! let sys = MockSystem::new()
//!     .with_exec(MockExec::stdout("/Applications/Xcode.app/Contents/Developer\n"))
//!     .with_existing("/Applications/Xcode.app/Contents/Developer");
//! let carthage = StaticDetector::missing();
//! let settings = Settings::default();
//! let ctx = CheckContext::new(&sys, &carthage, &settings);
//!
//! let mut ui = MockUI::new();
//! let doctor = Doctor::new(vec![Box::new(XcodeCheck)]);
//! let report = doctor.run(&ctx, &mut FixSession::new(&mut ui), true);
//! assert!(report.success());
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod detection;
pub mod doctor;
pub mod error;
pub mod sys;
pub mod ui;

pub use error::{DoctorError, Result};

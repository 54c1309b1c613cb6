//! Run command implementation.
//!
//! The `ios-doctor run` command diagnoses the machine and offers fixes.

use std::path::{Path, PathBuf};

use crate::checks::CheckContext;
use crate::cli::args::RunArgs;
use crate::config::{load_settings, Settings};
use crate::detection::{PathDetector, ToolDetector};
use crate::doctor::{Doctor, DoctorReport};
use crate::error::Result;
use crate::sys::{HostSystem, System};
use crate::ui::{FixAnswer, FixSession, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    project_root: PathBuf,
    config: Option<PathBuf>,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(project_root: &Path, config: Option<&Path>, args: RunArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config: config.map(Path::to_path_buf),
            args,
        }
    }

    /// Run against the given collaborators.
    pub fn run_with(
        &self,
        settings: &Settings,
        system: &dyn System,
        carthage: &dyn ToolDetector,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let mut skip = settings.skip.clone();
        skip.extend(self.args.skip.iter().cloned());
        let doctor = Doctor::ios(&skip);

        let ctx = CheckContext::new(system, carthage, settings);
        let report = {
            let mut session = if self.args.yes {
                FixSession::with_answer(ui, FixAnswer::Yes)
            } else {
                FixSession::new(ui)
            };
            doctor.run(&ctx, &mut session, !self.args.no_fix)
        };

        if self.args.json {
            print_json(&report)?;
        }

        if report.success() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

fn print_json(report: &DoctorReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report).map_err(anyhow::Error::from)?;
    println!("{}", json);
    Ok(())
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let settings = load_settings(&self.project_root, self.config.as_deref())?;
        tracing::debug!("settings: {:?}", settings);

        let carthage = PathDetector::new("carthage", settings.carthage_paths.clone());
        self.run_with(&settings, &HostSystem::new(), &carthage, ui)
    }
}

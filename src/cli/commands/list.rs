//! List command implementation.
//!
//! The `ios-doctor list` command lists the checks a run would perform.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::checks::{ios_checks, Check};
use crate::cli::args::ListArgs;
use crate::config::load_settings;
use crate::error::Result;
use crate::ui::{should_use_colors, DoctorTheme, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// One row of `list` output.
#[derive(Debug, Serialize)]
struct CheckEntry {
    id: &'static str,
    description: &'static str,
    autofix: bool,
    skipped: bool,
}

/// The list command implementation.
pub struct ListCommand {
    project_root: PathBuf,
    config: Option<PathBuf>,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(project_root: &Path, config: Option<&Path>, args: ListArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config: config.map(Path::to_path_buf),
            args,
        }
    }

    fn entries(checks: &[Box<dyn Check>], skip: &[String]) -> Vec<CheckEntry> {
        checks
            .iter()
            .map(|c| CheckEntry {
                id: c.id(),
                description: c.description(),
                autofix: c.autofix(),
                skipped: skip.iter().any(|s| s == c.id()),
            })
            .collect()
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let settings = load_settings(&self.project_root, self.config.as_deref())?;
        let entries = Self::entries(&ios_checks(), &settings.skip);

        if self.args.json {
            let json = serde_json::to_string_pretty(&entries).map_err(anyhow::Error::from)?;
            println!("{}", json);
            return Ok(CommandResult::success());
        }

        let theme = if should_use_colors() {
            DoctorTheme::new()
        } else {
            DoctorTheme::plain()
        };
        ui.message(&format!("  {}", theme.header.apply_to("Checks:")));
        for entry in &entries {
            let mut tags = Vec::new();
            if entry.autofix {
                tags.push("autofix");
            }
            if entry.skipped {
                tags.push("skipped");
            }
            let suffix = if tags.is_empty() {
                String::new()
            } else {
                format!(" {}", theme.dim.apply_to(format!("({})", tags.join(", "))))
            };
            ui.message(&format!(
                "    {}{} {}",
                theme.highlight.apply_to(entry.id),
                suffix,
                theme.dim.apply_to(format!("- {}", entry.description))
            ));
        }

        Ok(CommandResult::success())
    }
}

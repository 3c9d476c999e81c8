//! Update command implementation.
//!
//! Re-installs every artifact found in the manifest's target directories
//! with `replace = true`, then re-runs the plugin-package dependency step.
//! Per-artifact failures are logged and the loop continues; there is no
//! rollback.

use std::path::{Path, PathBuf};

use crate::cli::args::UpdateArgs;
use crate::context::ProjectContext;
use crate::error::Result;
use crate::inject::ensure_plugin_packages;
use crate::installer::{list_installed, ArtifactInstaller};
use crate::manifest::Manifest;
use crate::templates::Category;
use crate::ui::{confirm, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The update command implementation.
pub struct UpdateCommand {
    project_root: PathBuf,
    args: UpdateArgs,
}

impl UpdateCommand {
    /// Create a new update command.
    pub fn new(project_root: &Path, args: UpdateArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }
}

impl Command for UpdateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = ProjectContext::new(&self.project_root);
        let manifest = Manifest::load(ctx.manifest_path())?;

        if !self.args.yes {
            let proceed = confirm(
                ui,
                "update_all",
                "Re-sync every installed component, hook, util, provider, and layout?",
                false,
            )?;
            if !proceed {
                ui.message("Update cancelled");
                return Ok(CommandResult::success());
            }
        }

        let mut installer = ArtifactInstaller::new(&ctx, &manifest)?;

        for category in Category::ALL {
            let installed = list_installed(&ctx, &manifest, category);
            if installed.is_empty() {
                ui.message(&format!("No {category} to update"));
                continue;
            }

            ui.message(&format!("Updating installed {category}..."));
            for name in installed {
                // An artifact reached earlier as a dependency must still be
                // replaceable when it comes up as a root target.
                installer.reset_visited();
                installer.install(category, &name, true, ui)?;
            }
        }

        ensure_plugin_packages(installer.packages_mut(), ui);

        ui.success("All installed artifacts have been updated");
        Ok(CommandResult::success())
    }
}

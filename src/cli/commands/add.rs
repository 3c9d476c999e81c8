//! Add-family command implementation.
//!
//! One implementation serves `add`, `hook`, `util`, `provider`, and
//! `layout`; the category is fixed by the dispatcher. Without a name the
//! command lists the available templates in a select prompt.

use std::path::{Path, PathBuf};

use crate::cli::args::AddArgs;
use crate::context::ProjectContext;
use crate::error::Result;
use crate::installer::ArtifactInstaller;
use crate::manifest::Manifest;
use crate::templates::{self, Category};
use crate::ui::{select, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The add command implementation, parameterized by category.
pub struct AddCommand {
    project_root: PathBuf,
    category: Category,
    args: AddArgs,
}

impl AddCommand {
    /// Create a new add command.
    pub fn new(project_root: &Path, category: Category, args: AddArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            category,
            args,
        }
    }

    /// Resolve the template name, prompting when none was given.
    fn resolve_name(&self, ui: &mut dyn UserInterface) -> Result<Option<String>> {
        if let Some(name) = &self.args.name {
            return Ok(Some(name.clone()));
        }

        let available = templates::list_available(self.category);
        if available.is_empty() {
            ui.error(&format!(
                "No {} templates are bundled with this build",
                self.category.singular()
            ));
            return Ok(None);
        }

        let question = format!("Which {} would you like to add?", self.category.singular());
        let choice = select(ui, self.category.singular(), &question, &available)?;
        Ok(Some(choice))
    }
}

impl Command for AddCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = ProjectContext::new(&self.project_root);
        let manifest = Manifest::load(ctx.manifest_path())?;

        let Some(name) = self.resolve_name(ui)? else {
            return Ok(CommandResult::success());
        };

        let mut installer = ArtifactInstaller::new(&ctx, &manifest)?;
        let summary = installer.install(self.category, &name, self.args.replace, ui)?;

        tracing::debug!(
            installed = summary.installed.len(),
            skipped = summary.skipped.len(),
            failed = summary.failed.len(),
            "add finished"
        );

        // Per-item failures were already reported; the command itself
        // succeeded by running to completion.
        Ok(CommandResult::success())
    }
}

//! Init command implementation.
//!
//! Detects the consumer's toolchain, confirms the plan, installs the
//! Tailwind plugin packages and base utilities, runs all three config
//! injectors, and writes the schema-B manifest. After init every
//! add-family command works without further setup.

use std::path::{Path, PathBuf};

use crate::cli::args::InitArgs;
use crate::context::ProjectContext;
use crate::detection::{
    detect_framework, detect_package_manager, detect_tailwind_version, resolve_aliases,
    TailwindVersion,
};
use crate::error::Result;
use crate::inject::{
    configure_fonts, configure_stylesheet, configure_tailwind, ensure_plugin_packages,
};
use crate::installer::ArtifactInstaller;
use crate::manifest::Manifest;
use crate::templates::Category;
use crate::ui::{confirm, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// Utility templates every project gets at init.
const BASE_UTILS: [&str; 2] = ["cn.ts", "types.ts"];

/// npm packages the base utilities and component variants rely on.
const BASE_PACKAGES: [&str; 3] = ["clsx", "tailwind-merge", "class-variance-authority"];

/// The init command implementation.
pub struct InitCommand {
    project_root: PathBuf,
    args: InitArgs,
}

impl InitCommand {
    /// Create a new init command.
    pub fn new(project_root: &Path, args: InitArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }
}

impl Command for InitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = ProjectContext::new(&self.project_root);

        ui.message("Initializing Glint...");

        let framework = detect_framework(&ctx);
        let package_manager = detect_package_manager(&ctx);
        let tailwind = detect_tailwind_version(&ctx).unwrap_or(TailwindVersion::V4);
        let resolved = resolve_aliases(&ctx, framework);

        ui.message("Detected configuration:");
        ui.message(&format!("  Framework:       {framework}"));
        ui.message(&format!(
            "  Tailwind CSS:    {}",
            match tailwind {
                TailwindVersion::V3 => "v3",
                TailwindVersion::V4 => "v4",
            }
        ));
        ui.message(&format!("  Package manager: {package_manager}"));
        ui.message(&format!(
            "  Base path:       {} (alias: {})",
            resolved.base_path, resolved.alias_prefix
        ));
        ui.message(&format!("  Components:      {}", resolved.aliases.components));
        ui.message(&format!("  Hooks:           {}", resolved.aliases.hooks));
        ui.message(&format!("  Utils:           {}", resolved.aliases.utils));
        ui.message(&format!("  Providers:       {}", resolved.aliases.providers));
        ui.message(&format!("  Layouts:         {}", resolved.aliases.layouts));

        if !self.args.defaults {
            let proceed = confirm(ui, "init", "Proceed with this configuration?", true)?;
            if !proceed {
                ui.message("Aborted");
                return Ok(CommandResult::success());
            }
        }

        let manifest = Manifest {
            path: resolved.base_path.clone(),
            aliases: resolved.aliases.clone(),
        };

        // Fails fast here when package.json is missing; nothing has been
        // written yet at that point.
        let mut installer = ArtifactInstaller::new(&ctx, &manifest)?;

        ui.message("Installing Tailwind plugin packages...");
        ensure_plugin_packages(installer.packages_mut(), ui);

        ui.message("Installing base utilities...");
        for util in BASE_UTILS {
            installer.install(Category::Utils, util, false, ui)?;
        }
        let base_packages = BASE_PACKAGES.iter().map(|p| p.to_string()).collect();
        installer.packages_mut().ensure_installed(&base_packages, ui);

        ui.message("Configuring Tailwind...");
        configure_tailwind(&ctx, tailwind, &resolved.base_path, self.args.defaults, ui)?;

        ui.message("Configuring global stylesheet...");
        configure_stylesheet(&ctx, framework, tailwind, self.args.defaults, ui)?;

        ui.message("Configuring fonts...");
        configure_fonts(&ctx, framework, self.args.defaults, ui)?;

        manifest.save(ctx.manifest_path())?;
        ui.success("Created glint.json");

        ui.message("Next steps:");
        ui.message("  glint add            # add a component interactively");
        ui.message("  glint add Button     # add a specific component");
        ui.message("  glint hook           # add a hook");

        Ok(CommandResult::success())
    }
}

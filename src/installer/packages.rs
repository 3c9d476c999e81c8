//! External package installation via the host package manager.

use serde_json::Value;
use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::Path;

use crate::context::ProjectContext;
use crate::detection::{detect_package_manager, PackageManager};
use crate::error::{GlintError, Result};
use crate::shell;
use crate::ui::UserInterface;

/// Runs the actual install command; injectable so tests never spawn a
/// package manager.
pub type CommandRunner<'a> = &'a dyn Fn(&str, &[String], &Path) -> Result<()>;

/// Installs missing npm packages for copied templates.
///
/// The declared-dependency set is read once per command and extended after
/// each successful install, so the same package never triggers two
/// manager invocations in one run. A failed install leaves the set
/// untouched; a later file needing the same package will retry.
pub struct PackageInstaller<'a> {
    ctx: &'a ProjectContext,
    manager: PackageManager,
    declared: HashSet<String>,
    runner: CommandRunner<'a>,
}

impl std::fmt::Debug for PackageInstaller<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PackageInstaller")
            .field("manager", &self.manager)
            .field("declared", &self.declared)
            .finish_non_exhaustive()
    }
}

impl<'a> PackageInstaller<'a> {
    /// Create an installer, reading the consumer's declared dependencies.
    ///
    /// A missing `package.json` is fatal: there is no project to install
    /// into.
    pub fn new(ctx: &'a ProjectContext) -> Result<Self> {
        Self::with_runner(ctx, &run_install_command)
    }

    /// Create an installer with an injected command runner (tests).
    pub fn with_runner(ctx: &'a ProjectContext, runner: CommandRunner<'a>) -> Result<Self> {
        let declared = read_declared_dependencies(ctx)?;
        let manager = detect_package_manager(ctx);

        Ok(Self {
            ctx,
            manager,
            declared,
            runner,
        })
    }

    /// The detected package manager.
    pub fn manager(&self) -> PackageManager {
        self.manager
    }

    /// Dependency names the consumer already declares.
    pub fn declared(&self) -> &HashSet<String> {
        &self.declared
    }

    /// Install whichever of `required` is not yet declared.
    ///
    /// Never fails the surrounding command: a non-zero exit from the
    /// manager is reported with a remediation hint and swallowed.
    pub fn ensure_installed(&mut self, required: &BTreeSet<String>, ui: &mut dyn UserInterface) {
        let missing: Vec<String> = required
            .iter()
            .filter(|pkg| !self.declared.contains(*pkg))
            .cloned()
            .collect();

        if missing.is_empty() {
            if !required.is_empty() {
                ui.detail("All dependencies already installed");
            }
            return;
        }

        ui.message(&format!(
            "Installing missing dependencies with {}: {}",
            self.manager,
            missing.join(", ")
        ));

        let args = self.manager.install_args(&missing);
        match (self.runner)(self.manager.program(), &args, self.ctx.root()) {
            Ok(()) => {
                self.declared.extend(missing);
                ui.success("Dependencies installed");
            }
            Err(err) => {
                let code = match &err {
                    GlintError::CommandFailed { code, .. } => *code,
                    _ => None,
                };
                ui.error(&format!("Installing dependencies failed: {err}"));
                ui.message(&self.manager.failure_hint(code));
            }
        }
    }
}

/// Default command runner: spawn the manager with inherited stdio.
fn run_install_command(program: &str, args: &[String], cwd: &Path) -> Result<()> {
    shell::run_inherited(program, args, cwd)
}

/// Read `dependencies ∪ devDependencies` names from package.json.
fn read_declared_dependencies(ctx: &ProjectContext) -> Result<HashSet<String>> {
    let path = ctx.root().join("package.json");
    if !path.exists() {
        return Err(GlintError::PackageManifestMissing {
            root: ctx.root().to_path_buf(),
        });
    }

    let content = fs::read_to_string(&path)?;
    let manifest: Value =
        serde_json::from_str(&content).map_err(|e| GlintError::PackageManifestParseError {
            message: e.to_string(),
        })?;

    let mut declared = HashSet::new();
    for key in ["dependencies", "devDependencies"] {
        if let Some(deps) = manifest.get(key).and_then(Value::as_object) {
            declared.extend(deps.keys().cloned());
        }
    }
    Ok(declared)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::cell::RefCell;
    use tempfile::TempDir;

    fn project(package_json: &str) -> (TempDir, ProjectContext) {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), package_json).unwrap();
        let ctx = ProjectContext::new(temp.path());
        (temp, ctx)
    }

    fn required(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn missing_package_json_is_fatal() {
        let temp = TempDir::new().unwrap();
        let ctx = ProjectContext::new(temp.path());
        let err = PackageInstaller::new(&ctx).unwrap_err();
        assert!(matches!(err, GlintError::PackageManifestMissing { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn declared_union_includes_dev_dependencies() {
        let (_t, ctx) = project(
            r#"{ "dependencies": { "react": "^18.0.0" },
                 "devDependencies": { "vite": "^6.0.0" } }"#,
        );
        let installer = PackageInstaller::with_runner(&ctx, &|_, _, _| Ok(())).unwrap();
        assert!(installer.declared().contains("react"));
        assert!(installer.declared().contains("vite"));
    }

    #[test]
    fn already_declared_packages_skip_the_manager() {
        let (_t, ctx) = project(r#"{ "dependencies": { "react": "^18.0.0" } }"#);
        let calls = RefCell::new(0);
        let runner = |_: &str, _: &[String], _: &Path| {
            *calls.borrow_mut() += 1;
            Ok(())
        };
        let mut installer = PackageInstaller::with_runner(&ctx, &runner).unwrap();
        let mut ui = MockUI::new();

        installer.ensure_installed(&required(&["react"]), &mut ui);
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn missing_packages_invoke_manager_once_per_run() {
        let (_t, ctx) = project(r#"{ "dependencies": {} }"#);
        let invocations = RefCell::new(Vec::new());
        let runner = |program: &str, args: &[String], _: &Path| {
            invocations.borrow_mut().push((program.to_string(), args.to_vec()));
            Ok(())
        };
        let mut installer = PackageInstaller::with_runner(&ctx, &runner).unwrap();
        let mut ui = MockUI::new();

        installer.ensure_installed(&required(&["lucide-react"]), &mut ui);
        // Second file requiring the same package: the declared set grew.
        installer.ensure_installed(&required(&["lucide-react"]), &mut ui);

        let invocations = invocations.borrow();
        assert_eq!(invocations.len(), 1);
        assert_eq!(invocations[0].0, "npm");
        assert_eq!(invocations[0].1, ["install", "lucide-react@latest"]);
    }

    #[test]
    fn failed_install_is_reported_not_fatal() {
        let (_t, ctx) = project(r#"{ "dependencies": {} }"#);
        let runner = |program: &str, _: &[String], _: &Path| {
            Err(GlintError::CommandFailed {
                command: program.to_string(),
                code: Some(1),
            })
        };
        let mut installer = PackageInstaller::with_runner(&ctx, &runner).unwrap();
        let mut ui = MockUI::new();

        installer.ensure_installed(&required(&["lucide-react"]), &mut ui);

        assert_eq!(ui.errors().len(), 1);
        // Failure leaves the package undeclared so a later file retries.
        assert!(!installer.declared().contains("lucide-react"));
    }

    #[test]
    fn lockfile_selects_manager_verb() {
        let (temp, ctx) = project(r#"{ "dependencies": {} }"#);
        fs::write(temp.path().join("pnpm-lock.yaml"), "").unwrap();
        // Re-create context after the lockfile exists.
        let ctx = ProjectContext::new(ctx.root());
        let invocations = RefCell::new(Vec::new());
        let runner = |program: &str, args: &[String], _: &Path| {
            invocations.borrow_mut().push((program.to_string(), args.to_vec()));
            Ok(())
        };
        let mut installer = PackageInstaller::with_runner(&ctx, &runner).unwrap();
        let mut ui = MockUI::new();

        installer.ensure_installed(&required(&["clsx"]), &mut ui);

        let invocations = invocations.borrow();
        assert_eq!(invocations[0].0, "pnpm");
        assert_eq!(invocations[0].1, ["add", "clsx@latest"]);
    }
}

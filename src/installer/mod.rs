//! Artifact installation.
//!
//! Installing one artifact can require others: a component template imports
//! hooks, utils, providers, or further components, and each of those may
//! import more. Rather than recursing through install calls, the installer
//! keeps an explicit frontier of `(category, name)` requests and a visited
//! set, so dependency cycles terminate and the traversal is observable in
//! tests.
//!
//! Failure policy per request: unknown template names and already-existing
//! targets are reported and skipped; the frontier keeps draining. Only
//! environment errors (IO, missing package.json) abort the command.

pub mod imports;
pub mod packages;

pub use imports::{classify, extract_specifiers, scan, DependencyRef};
pub use packages::{CommandRunner, PackageInstaller};

use include_dir::Dir;
use std::collections::{BTreeSet, HashSet, VecDeque};
use std::fs;
use std::path::Path;

use crate::context::ProjectContext;
use crate::error::{GlintError, Result};
use crate::manifest::Manifest;
use crate::templates::{self, Category, TemplateEntry};
use crate::ui::UserInterface;

/// Files with this infix are local preview harnesses, never installed.
const DEV_VARIANT_INFIX: &str = ".dev.";

/// One queued install request.
#[derive(Debug, Clone)]
struct Request {
    category: Category,
    name: String,
    replace: bool,
}

/// What a single `install` call did, for reporting and tests.
#[derive(Debug, Default)]
pub struct InstallSummary {
    /// Artifacts copied, in install order.
    pub installed: Vec<String>,
    /// Artifacts skipped because the target already existed.
    pub skipped: Vec<String>,
    /// Requests that failed (unknown template names).
    pub failed: Vec<String>,
}

/// Work-queue installer over the bundled template tree.
pub struct ArtifactInstaller<'a> {
    ctx: &'a ProjectContext,
    manifest: &'a Manifest,
    packages: PackageInstaller<'a>,
    visited: HashSet<(Category, String)>,
    frontier: VecDeque<Request>,
}

impl<'a> ArtifactInstaller<'a> {
    /// Create an installer for one command run.
    pub fn new(ctx: &'a ProjectContext, manifest: &'a Manifest) -> Result<Self> {
        let packages = PackageInstaller::new(ctx)?;
        Ok(Self::with_packages(ctx, manifest, packages))
    }

    /// Create an installer with a pre-built package installer (tests).
    pub fn with_packages(
        ctx: &'a ProjectContext,
        manifest: &'a Manifest,
        packages: PackageInstaller<'a>,
    ) -> Self {
        Self {
            ctx,
            manifest,
            packages,
            visited: HashSet::new(),
            frontier: VecDeque::new(),
        }
    }

    /// Access the package installer (the update command re-runs its
    /// dependency step after the artifact loop).
    pub fn packages_mut(&mut self) -> &mut PackageInstaller<'a> {
        &mut self.packages
    }

    /// Forget which artifacts this run has handled.
    ///
    /// The update command calls this between root artifacts: an artifact
    /// first reached as somebody's dependency (and therefore skipped, since
    /// it exists) must still be replaceable when its own turn comes.
    pub fn reset_visited(&mut self) {
        self.visited.clear();
    }

    /// Install an artifact and everything it transitively needs.
    pub fn install(
        &mut self,
        category: Category,
        name: &str,
        replace: bool,
        ui: &mut dyn UserInterface,
    ) -> Result<InstallSummary> {
        let mut summary = InstallSummary::default();

        self.frontier.push_back(Request {
            category,
            name: name.to_string(),
            replace,
        });

        while let Some(request) = self.frontier.pop_front() {
            let key = (request.category, request.name.clone());
            if !self.visited.insert(key) {
                continue;
            }

            match self.install_one(&request, ui) {
                Ok(Some(resolved)) => summary.installed.push(resolved),
                Ok(None) => {}
                Err(GlintError::TargetExists { category, name }) => {
                    ui.warning(&format!("{category} \"{name}\" already exists, skipping"));
                    summary.skipped.push(name);
                }
                Err(err) if err.is_fatal() => return Err(err),
                Err(err) => {
                    ui.error(&err.to_string());
                    summary.failed.push(request.name.clone());
                }
            }
        }

        Ok(summary)
    }

    /// Install a single request, pushing its internal references onto the
    /// frontier. Returns the resolved entry name, or `None` when another
    /// spelling of the same entry was already handled this run.
    fn install_one(
        &mut self,
        request: &Request,
        ui: &mut dyn UserInterface,
    ) -> Result<Option<String>> {
        let Some(entry) = templates::find(request.category, &request.name) else {
            return Err(GlintError::UnknownTemplate {
                category: request.category.singular().to_string(),
                name: request.name.clone(),
            });
        };

        let resolved = entry.name();
        if !self
            .visited
            .insert((request.category, resolved.clone()))
            && resolved != request.name
        {
            return Ok(None);
        }

        let target_dir = templates::target_dir(self.ctx, self.manifest, request.category);
        let target = target_dir.join(&resolved);

        if target.exists() && !request.replace {
            return Err(GlintError::TargetExists {
                category: request.category.singular().to_string(),
                name: resolved,
            });
        }

        fs::create_dir_all(&target_dir)?;

        match entry {
            TemplateEntry::File(file) => {
                fs::write(&target, file.contents())?;
                ui.detail(&format!("→ {}", target.display()));
                if let Some(source) = file.contents_utf8() {
                    self.process_copied_file(source, ui);
                }
            }
            TemplateEntry::Dir(dir) => {
                if target.exists() {
                    // replace was requested; start the directory fresh
                    fs::remove_dir_all(&target)?;
                }
                self.copy_embedded_dir(dir, dir.path(), &target, ui)?;
            }
        }

        ui.success(&format!(
            "Added {} to {}",
            resolved,
            self.manifest.aliases.for_category(request.category)
        ));
        Ok(Some(resolved))
    }

    /// Recursively copy an embedded directory, scanning each copied file.
    fn copy_embedded_dir(
        &mut self,
        dir: &Dir<'_>,
        root: &Path,
        target: &Path,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        fs::create_dir_all(target)?;

        for sub in dir.dirs() {
            let rel = sub.path().strip_prefix(root).unwrap_or(sub.path());
            self.copy_embedded_dir(sub, root, &target.join(rel), ui)?;
        }

        for file in dir.files() {
            let file_name = file
                .path()
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            if file_name.contains(DEV_VARIANT_INFIX) {
                continue;
            }

            let rel = file.path().strip_prefix(root).unwrap_or(file.path());
            let destination = target.join(rel);
            fs::write(&destination, file.contents())?;
            ui.detail(&format!("→ {}", destination.display()));

            if let Some(source) = file.contents_utf8() {
                self.process_copied_file(source, ui);
            }
        }

        Ok(())
    }

    /// Scan one copied file: queue internal references, install externals.
    fn process_copied_file(&mut self, source: &str, ui: &mut dyn UserInterface) {
        let mut externals = BTreeSet::new();

        for reference in imports::scan(source, self.packages.declared()) {
            match reference {
                DependencyRef::External(package) => {
                    externals.insert(package);
                }
                DependencyRef::Internal { category, name } => {
                    self.frontier.push_back(Request {
                        category,
                        name,
                        replace: false,
                    });
                }
            }
        }

        self.packages.ensure_installed(&externals, ui);
    }
}

/// List artifact names currently installed for a category.
///
/// Reads the category's target directory; a missing directory means
/// nothing is installed.
pub fn list_installed(
    ctx: &ProjectContext,
    manifest: &Manifest,
    category: Category,
) -> Vec<String> {
    let dir = templates::target_dir(ctx, manifest, category);
    let Ok(entries) = fs::read_dir(&dir) else {
        return Vec::new();
    };

    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    names.sort();
    names
}

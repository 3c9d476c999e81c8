//! Idempotent consumer-config mutation.
//!
//! Three targets get patched so installed templates actually work: the
//! Tailwind config file, the global stylesheet, and the document
//! head/layout file. Each target follows the same state machine:
//!
//! - Absent → created whole
//! - Present, idempotency marker found → untouched (byte-identical)
//! - Present, unconfigured → confirm (unless `defaults`), back up to a
//!   `.bak` sibling, then mutate textually at known anchors
//!
//! Injection is substring-anchored; the consumer's config dialect is never
//! reparsed. When no anchor can be found the mutation is skipped and manual
//! instructions are printed; that path is never fatal.

pub mod fonts;
pub mod stylesheet;
pub mod tailwind;

pub use fonts::configure_fonts;
pub use stylesheet::configure_stylesheet;
pub use tailwind::{configure_tailwind, ensure_plugin_packages, PLUGIN_PACKAGES};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::ui::{confirm, UserInterface};

/// What an injector did to its target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InjectOutcome {
    /// Target was absent and has been created.
    Created(PathBuf),
    /// Target existed and has been patched (after a backup).
    Updated(PathBuf),
    /// Idempotency marker found; target untouched.
    AlreadyConfigured(PathBuf),
    /// User declined the mutation, or no injection point was found.
    Skipped(PathBuf),
    /// No candidate target exists in the project.
    NoTarget,
}

impl InjectOutcome {
    /// Path of the target this outcome refers to, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Created(p) | Self::Updated(p) | Self::AlreadyConfigured(p) | Self::Skipped(p) => {
                Some(p)
            }
            Self::NoTarget => None,
        }
    }
}

/// Write a `.bak` sibling before the first mutation of `path`.
pub(crate) fn backup(path: &Path, ui: &mut dyn UserInterface) -> Result<()> {
    let mut backup_path = path.as_os_str().to_owned();
    backup_path.push(".bak");
    fs::copy(path, PathBuf::from(&backup_path))?;
    ui.message(&format!(
        "Backup created: {}",
        PathBuf::from(backup_path).display()
    ));
    Ok(())
}

/// Ask before touching an existing file, unless `defaults` was passed.
pub(crate) fn approve_mutation(
    ui: &mut dyn UserInterface,
    defaults: bool,
    key: &str,
    question: &str,
) -> Result<bool> {
    if defaults {
        return Ok(true);
    }
    confirm(ui, key, question, true)
}

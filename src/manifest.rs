//! Installer manifest (`glint.json`) loading and normalization.
//!
//! Two schemas exist in the wild:
//!
//! - Schema A (legacy): `{ "path": "./src/" }`
//! - Schema B: `{ "path": "./src/", "aliases": { "components": "...", ... } }`
//!
//! [`ManifestSchema`] is the tagged raw form straight off disk;
//! [`ManifestSchema::normalize`] turns either schema into the canonical
//! [`Manifest`]. Normalization is pure and total: it never fails and is
//! idempotent. Only [`Manifest::load`] can fail, and that failure is fatal
//! for the whole command because nothing works without the manifest.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{GlintError, Result};
use crate::templates::Category;

/// Per-category target paths, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPaths {
    pub components: String,
    pub hooks: String,
    pub utils: String,
    pub providers: String,
    pub layouts: String,
}

impl CategoryPaths {
    /// Derive per-category paths from a base path.
    pub fn from_base(base: &str) -> Self {
        let base = if base.ends_with('/') {
            base.to_string()
        } else {
            format!("{base}/")
        };
        Self {
            components: format!("{base}components"),
            hooks: format!("{base}hooks"),
            utils: format!("{base}utils"),
            providers: format!("{base}providers"),
            layouts: format!("{base}layouts"),
        }
    }

    /// Target path for a category.
    pub fn for_category(&self, category: Category) -> &str {
        match category {
            Category::Components => &self.components,
            Category::Hooks => &self.hooks,
            Category::Utils => &self.utils,
            Category::Providers => &self.providers,
            Category::Layouts => &self.layouts,
        }
    }
}

/// Canonical, normalized manifest every command works with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Base source path of the consumer project (informational once
    /// aliases exist, still persisted for older readers).
    pub path: String,
    pub aliases: CategoryPaths,
}

/// Raw manifest as found on disk, before normalization.
///
/// Variant order matters: serde tries them top to bottom, so a record with
/// an `aliases` table is schema B even if it also carries `path`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ManifestSchema {
    /// Schema B: per-category aliases present.
    AliasBased {
        #[serde(default)]
        path: Option<String>,
        aliases: CategoryPaths,
    },
    /// Schema A: single base path only.
    Legacy { path: String },
    /// Neither field present (or unusable); normalized to the fixed
    /// fallback rooted at the working directory.
    Bare {},
}

impl ManifestSchema {
    /// Produce the canonical manifest. Pure, total, idempotent.
    pub fn normalize(self) -> Manifest {
        match self {
            Self::AliasBased { path, aliases } => Manifest {
                path: path.unwrap_or_else(|| "./".to_string()),
                aliases,
            },
            Self::Legacy { path } => {
                let aliases = CategoryPaths::from_base(&path);
                Manifest { path, aliases }
            }
            Self::Bare {} => Manifest {
                path: "./".to_string(),
                aliases: CategoryPaths::from_base("./"),
            },
        }
    }
}

impl Manifest {
    /// Load and normalize the manifest from disk.
    ///
    /// Absence or a parse failure is fatal: the installer cannot resolve
    /// any target directory without it.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(GlintError::ManifestNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)?;
        let raw: ManifestSchema =
            serde_json::from_str(&content).map_err(|e| GlintError::ManifestParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Ok(raw.normalize())
    }

    /// Write the manifest to disk as pretty-printed schema B.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| anyhow::anyhow!("serializing manifest: {e}"))?;
        fs::write(path, content + "\n")?;
        Ok(())
    }
}

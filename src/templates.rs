//! Bundled template tree and lookup.
//!
//! The template library ships inside the binary, embedded at compile time
//! from `templates/`. Every artifact is identified by `(category, name)` and
//! backed by a file or a directory immediately under its category folder.
//! The locator only lists and resolves; copying is the installer's job.

use include_dir::{include_dir, Dir, DirEntry};
use std::fmt;
use std::path::PathBuf;

use crate::context::ProjectContext;
use crate::manifest::Manifest;

/// Embedded template library.
static TEMPLATE_ROOT: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Artifact categories, each with its own target directory convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Components,
    Hooks,
    Utils,
    Providers,
    Layouts,
}

impl Category {
    /// All categories, in the order `update` walks them.
    pub const ALL: [Category; 5] = [
        Category::Components,
        Category::Hooks,
        Category::Utils,
        Category::Providers,
        Category::Layouts,
    ];

    /// Directory name under the template root and the target base path.
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Components => "components",
            Self::Hooks => "hooks",
            Self::Utils => "utils",
            Self::Providers => "providers",
            Self::Layouts => "layouts",
        }
    }

    /// Singular label for user-facing messages.
    pub fn singular(self) -> &'static str {
        match self {
            Self::Components => "component",
            Self::Hooks => "hook",
            Self::Utils => "util",
            Self::Providers => "provider",
            Self::Layouts => "layout",
        }
    }

    /// Conventional file extensions tried when a bare name is given.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Components | Self::Providers | Self::Layouts => &[".tsx", ".jsx"],
            Self::Hooks => &[".ts", ".tsx"],
            Self::Utils => &[".ts"],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// A resolved template source: a single file or a directory of files.
#[derive(Debug, Clone, Copy)]
pub enum TemplateEntry<'a> {
    File(&'a include_dir::File<'a>),
    Dir(&'a Dir<'a>),
}

impl TemplateEntry<'_> {
    /// Entry name (file name with extension, or directory name).
    pub fn name(&self) -> String {
        let path = match self {
            Self::File(f) => f.path(),
            Self::Dir(d) => d.path(),
        };
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// List immediate children of a category's template directory.
pub fn list_available(category: Category) -> Vec<String> {
    let Some(dir) = TEMPLATE_ROOT.get_dir(category.dir_name()) else {
        return Vec::new();
    };

    let mut names: Vec<String> = dir
        .entries()
        .iter()
        .filter_map(|entry| {
            entry
                .path()
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
        })
        .collect();
    names.sort();
    names
}

/// Find a template by name within a category.
///
/// Tries the name verbatim first, then with the category's conventional
/// extensions, so `Button` resolves the `Button.tsx` entry.
pub fn find(category: Category, name: &str) -> Option<TemplateEntry<'static>> {
    let dir = TEMPLATE_ROOT.get_dir(category.dir_name())?;

    let lookup = |candidate: &str| -> Option<TemplateEntry<'static>> {
        for entry in dir.entries() {
            let matches = entry
                .path()
                .file_name()
                .is_some_and(|n| n.to_string_lossy() == candidate);
            if matches {
                return Some(match entry {
                    DirEntry::File(f) => TemplateEntry::File(f),
                    DirEntry::Dir(d) => TemplateEntry::Dir(d),
                });
            }
        }
        None
    };

    if let Some(entry) = lookup(name) {
        return Some(entry);
    }
    for ext in category.extensions() {
        if let Some(entry) = lookup(&format!("{name}{ext}")) {
            return Some(entry);
        }
    }
    None
}

/// Resolve the on-disk target directory for a category.
pub fn target_dir(ctx: &ProjectContext, manifest: &Manifest, category: Category) -> PathBuf {
    ctx.resolve(manifest.aliases.for_category(category))
}

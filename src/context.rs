//! Project context passed into every component.
//!
//! Commands never read the ambient working directory; `main` resolves it
//! once and everything below receives a [`ProjectContext`]. This keeps the
//! installer testable against temporary directories.

use std::path::{Path, PathBuf};

/// Name of the installer manifest inside the consumer project.
pub const MANIFEST_FILE: &str = "glint.json";

/// Resolved location of the consumer project.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    root: PathBuf,
    manifest_path: PathBuf,
}

impl ProjectContext {
    /// Create a context rooted at the given project directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let manifest_path = root.join(MANIFEST_FILE);
        Self {
            root,
            manifest_path,
        }
    }

    /// The consumer project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Location of `glint.json` for this project.
    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    /// Resolve a project-relative path against the root.
    ///
    /// Strips the alias prefix (`@/`) and a leading `./` so manifest values
    /// in either spelling land in the same place.
    pub fn resolve(&self, relative: &str) -> PathBuf {
        let cleaned = relative
            .trim_start_matches("@/")
            .trim_start_matches("./")
            .trim_start_matches('/');
        self.root.join(cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_path_is_under_root() {
        let ctx = ProjectContext::new("/proj");
        assert_eq!(ctx.manifest_path(), Path::new("/proj/glint.json"));
    }

    #[test]
    fn resolve_strips_alias_prefix() {
        let ctx = ProjectContext::new("/proj");
        assert_eq!(
            ctx.resolve("@/components"),
            Path::new("/proj/components")
        );
    }

    #[test]
    fn resolve_strips_leading_dot_slash() {
        let ctx = ProjectContext::new("/proj");
        assert_eq!(
            ctx.resolve("./src/hooks"),
            Path::new("/proj/src/hooks")
        );
    }

    #[test]
    fn resolve_plain_relative_path() {
        let ctx = ProjectContext::new("/proj");
        assert_eq!(ctx.resolve("src/utils"), Path::new("/proj/src/utils"));
    }
}

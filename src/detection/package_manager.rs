//! Package manager detection and install-command construction.

use std::fmt;

use crate::context::ProjectContext;

/// Detected Node package manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Pnpm,
    Yarn,
    Npm,
    Bun,
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

impl PackageManager {
    /// The binary to invoke.
    pub fn program(self) -> &'static str {
        match self {
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
            Self::Npm => "npm",
            Self::Bun => "bun",
        }
    }

    /// Build the argv for installing `packages`, each pinned to `@latest`.
    pub fn install_args(self, packages: &[String]) -> Vec<String> {
        let verb = match self {
            Self::Npm => "install",
            Self::Pnpm | Self::Yarn | Self::Bun => "add",
        };

        let mut args = vec![verb.to_string()];
        args.extend(packages.iter().map(|p| format!("{p}@latest")));
        args
    }

    /// Remediation hint for a failed install, keyed off the manager.
    pub fn failure_hint(self, code: Option<i32>) -> String {
        let manager = self.program();
        match code {
            Some(126) | Some(243) => format!(
                "It looks like a permission problem. Check that {manager} can write to its \
                 global and project directories, or fix your npm prefix permissions."
            ),
            Some(127) => format!(
                "{manager} was not found. Make sure it is installed and on your PATH."
            ),
            Some(1) => format!(
                "{manager} reported an install failure. Common causes: a package name that \
                 does not exist, or a peer-dependency conflict; re-run with the same \
                 packages to see {manager}'s own output above."
            ),
            _ => "Check your internet connection and try again.".to_string(),
        }
    }
}

/// Detect the package manager by lockfile/marker presence.
///
/// First match wins; npm is the default when nothing identifies itself.
pub fn detect_package_manager(ctx: &ProjectContext) -> PackageManager {
    let markers: [(&str, PackageManager); 5] = [
        ("pnpm-lock.yaml", PackageManager::Pnpm),
        ("yarn.lock", PackageManager::Yarn),
        ("package-lock.json", PackageManager::Npm),
        ("bun.lockb", PackageManager::Bun),
        (".yarnrc.yml", PackageManager::Yarn),
    ];

    for (marker, manager) in markers {
        if ctx.root().join(marker).exists() {
            return manager;
        }
    }
    PackageManager::Npm
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn ctx_with(files: &[&str]) -> (TempDir, ProjectContext) {
        let temp = TempDir::new().unwrap();
        for f in files {
            fs::write(temp.path().join(f), "").unwrap();
        }
        let ctx = ProjectContext::new(temp.path());
        (temp, ctx)
    }

    #[test]
    fn pnpm_lockfile_wins() {
        let (_t, ctx) = ctx_with(&["pnpm-lock.yaml", "package-lock.json"]);
        assert_eq!(detect_package_manager(&ctx), PackageManager::Pnpm);
    }

    #[test]
    fn yarnrc_identifies_yarn() {
        let (_t, ctx) = ctx_with(&[".yarnrc.yml"]);
        assert_eq!(detect_package_manager(&ctx), PackageManager::Yarn);
    }

    #[test]
    fn bun_lockfile() {
        let (_t, ctx) = ctx_with(&["bun.lockb"]);
        assert_eq!(detect_package_manager(&ctx), PackageManager::Bun);
    }

    #[test]
    fn default_is_npm() {
        let (_t, ctx) = ctx_with(&[]);
        assert_eq!(detect_package_manager(&ctx), PackageManager::Npm);
    }

    #[test]
    fn npm_install_args_pin_latest() {
        let args = PackageManager::Npm
            .install_args(&["clsx".to_string(), "tailwind-merge".to_string()]);
        assert_eq!(args, ["install", "clsx@latest", "tailwind-merge@latest"]);
    }

    #[test]
    fn add_verb_for_other_managers() {
        for manager in [PackageManager::Pnpm, PackageManager::Yarn, PackageManager::Bun] {
            let args = manager.install_args(&["clsx".to_string()]);
            assert_eq!(args[0], "add");
        }
    }

    #[test]
    fn failure_hints_mention_manager() {
        let hint = PackageManager::Pnpm.failure_hint(Some(127));
        assert!(hint.contains("pnpm"));
    }
}

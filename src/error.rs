//! Error types for Glint operations.
//!
//! This module defines [`GlintError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Fatal errors (missing or unparsable `glint.json`, missing
//!   `package.json`) bubble up to `main` and exit non-zero
//! - Per-artifact errors (unknown template, existing target) are reported
//!   and swallowed by the calling loop so the command keeps going
//! - Use `anyhow::Error` (via `GlintError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Glint operations.
#[derive(Debug, Error)]
pub enum GlintError {
    /// Installer manifest not found at expected location.
    #[error("glint.json not found at {path}. Run `glint init` first")]
    ManifestNotFound { path: PathBuf },

    /// Failed to parse the installer manifest.
    #[error("Failed to parse {path}: {message}")]
    ManifestParseError { path: PathBuf, message: String },

    /// Consumer project has no package manifest.
    #[error("No package.json found in {root}. Run `npm init` first")]
    PackageManifestMissing { root: PathBuf },

    /// Failed to parse the consumer's package manifest.
    #[error("Failed to parse package.json: {message}")]
    PackageManifestParseError { message: String },

    /// Referenced template does not exist in the bundled tree.
    #[error("Unknown {category} template: {name}")]
    UnknownTemplate { category: String, name: String },

    /// Target artifact already exists and replace was not requested.
    #[error("{category} \"{name}\" already exists")]
    TargetExists { category: String, name: String },

    /// Package-manager invocation failed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// A prompt was required but the session is non-interactive.
    #[error("Cannot prompt for {prompt} in non-interactive mode; pass a name explicitly")]
    NonInteractive { prompt: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Glint operations.
pub type Result<T> = std::result::Result<T, GlintError>;

impl GlintError {
    /// Whether this error should abort the whole command.
    ///
    /// Per-artifact errors are reported and skipped; everything else
    /// propagates.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            Self::UnknownTemplate { .. } | Self::TargetExists { .. } | Self::CommandFailed { .. }
        )
    }
}

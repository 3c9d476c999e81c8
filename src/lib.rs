//! Glint - installer CLI for the Glint UI design-system templates.
//!
//! Glint copies component, hook, util, provider, and layout templates from
//! the bundled library into a consuming React project, installs every
//! internal template a copied file imports, delegates missing npm packages
//! to the project's own package manager, and idempotently patches the
//! project's Tailwind config, global stylesheet, and document head.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`context`] - Explicit project context passed into every component
//! - [`detection`] - Framework, Tailwind, package-manager, and alias detection
//! - [`error`] - Error types and result aliases
//! - [`inject`] - Idempotent consumer-config mutation
//! - [`installer`] - Work-queue artifact installation and package installs
//! - [`manifest`] - `glint.json` loading and normalization
//! - [`shell`] - Subprocess execution
//! - [`templates`] - Bundled template tree and lookup
//! - [`ui`] - Interactive prompts and terminal output
//!
//! # Example
//!
//! ```
//! use glint::installer::{classify, DependencyRef};
//! use glint::templates::Category;
//! use std::collections::HashSet;
//!
//! // Classify one import specifier from a template file.
//! let installed = HashSet::new();
//! let reference = classify("../hooks/useMediaQuery", &installed);
//! assert_eq!(
//!     reference,
//!     Some(DependencyRef::Internal {
//!         category: Category::Hooks,
//!         name: "useMediaQuery".to_string(),
//!     })
//! );
//! ```

pub mod cli;
pub mod context;
pub mod detection;
pub mod error;
pub mod inject;
pub mod installer;
pub mod manifest;
pub mod shell;
pub mod templates;
pub mod ui;

pub use context::ProjectContext;
pub use error::{GlintError, Result};

//! Consumer-project toolchain detection.
//!
//! Everything in this module is read-only inspection of the consumer
//! project: which framework family it uses, which Tailwind major version,
//! which package manager, and where its path aliases point. Detection is
//! best-effort: a wrong or missing answer degrades to a conservative
//! default, never to a failure.

pub mod aliases;
pub mod framework;
pub mod package_manager;

pub use aliases::{resolve_aliases, ResolvedAliases};
pub use framework::{
    detect_framework, detect_tailwind_version, find_global_css, find_head_layout,
    find_tailwind_config, Framework, TailwindVersion,
};
pub use package_manager::{detect_package_manager, PackageManager};

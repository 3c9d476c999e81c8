//! Subprocess execution.
//!
//! Everything here is synchronous and blocking: the installer runs one
//! package-manager invocation at a time and waits for it. There are no
//! timeouts and no retries.

pub mod command;

pub use command::{run_captured, run_inherited, CapturedOutput};

/// Check if running in a CI environment.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}

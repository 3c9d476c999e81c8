//! Process invocation helpers.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{GlintError, Result};

/// Output of a captured command run.
#[derive(Debug, Clone)]
pub struct CapturedOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Whether the command succeeded (exit code 0).
    pub success: bool,
}

fn format_command(program: &str, args: &[String]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

/// Run a command with stdio inherited from this process.
///
/// Used for package-manager installs so their progress output is visible
/// live. Blocks until the child exits. A non-zero exit is returned as
/// [`GlintError::CommandFailed`], which callers treat as per-item.
pub fn run_inherited(program: &str, args: &[String], cwd: &Path) -> Result<()> {
    let cmd_line = format_command(program, args);
    tracing::debug!("running: {}", cmd_line);

    let status = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|_| GlintError::CommandFailed {
            command: cmd_line.clone(),
            code: None,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(GlintError::CommandFailed {
            command: cmd_line,
            code: status.code(),
        })
    }
}

/// Run a command capturing stdout/stderr.
pub fn run_captured(program: &str, args: &[String], cwd: &Path) -> Result<CapturedOutput> {
    let cmd_line = format_command(program, args);
    tracing::debug!("running (captured): {}", cmd_line);

    let output = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .output()
        .map_err(|_| GlintError::CommandFailed {
            command: cmd_line,
            code: None,
        })?;

    Ok(CapturedOutput {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        success: output.status.success(),
    })
}

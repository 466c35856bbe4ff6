//! Git command runner
//!
//! Every git invocation goes through here so the working directory is always
//! explicit and failures carry the command line and stderr.

use anyhow::{bail, Context, Result};
use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Output};

/// Run a git command in `dir` and return the raw Output.
///
/// Use this when you need both stdout and stderr, or custom handling of a
/// non-zero exit.
pub fn run_git<S: AsRef<OsStr>>(args: &[S], dir: &Path) -> Result<Output> {
    let command = format!("git {}", display_args(args));
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .with_context(|| format!("Failed to execute: {command}"))?;

    tracing::debug!(
        command = %command,
        dir = %dir.display(),
        status = ?output.status.code(),
        "git finished"
    );

    Ok(output)
}

/// Run a git command, check for success, and return stdout trimmed.
///
/// On failure, bails with the stderr content.
pub fn run_git_checked<S: AsRef<OsStr>>(args: &[S], dir: &Path) -> Result<String> {
    let output = run_git(args, dir)?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("git {} failed: {}", display_args(args), stderr.trim());
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Run a git command and return true if exit code is 0.
///
/// Spawn failures and non-zero exits both count as false.
pub fn run_git_bool<S: AsRef<OsStr>>(args: &[S], dir: &Path) -> bool {
    run_git(args, dir)
        .map(|output| output.status.success())
        .unwrap_or(false)
}

fn display_args<S: AsRef<OsStr>>(args: &[S]) -> String {
    args.iter()
        .map(|a| a.as_ref().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

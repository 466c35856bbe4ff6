//! Repository probes

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::git::runner::{run_git_bool, run_git_checked};

/// Check that a `git` binary is resolvable on PATH
pub fn git_available() -> bool {
    which::which("git").is_ok()
}

/// True when `dir` is inside a git repository (work tree or git dir)
pub fn is_repo(dir: &Path) -> bool {
    run_git_bool(&["rev-parse", "--git-dir"], dir)
}

/// Top-level directory of the working tree containing `dir`
pub fn repo_root(dir: &Path) -> Result<PathBuf> {
    let root = run_git_checked(&["rev-parse", "--show-toplevel"], dir)?;
    Ok(PathBuf::from(root))
}

//! Worktree operations
//!
//! Thin wrappers over `git worktree add/remove/list`. All of them take the
//! repository directory explicitly and propagate failures.

use anyhow::{Context, Result};
use std::ffi::OsStr;
use std::path::Path;

use super::parser::{parse_worktree_list, WorktreeInfo};
use crate::git::runner::run_git_checked;

/// Create a worktree at `path` checked out on `branch`.
///
/// With `base = Some(b)` a new branch is created from `b`:
///   git worktree add <path> -b <branch> <base>
/// With `base = None` an existing branch is checked out:
///   git worktree add <path> <branch>
pub fn add_worktree(repo_root: &Path, path: &Path, branch: &str, base: Option<&str>) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let mut args: Vec<&OsStr> = vec![OsStr::new("worktree"), OsStr::new("add"), path.as_os_str()];
    match base {
        Some(base) => {
            args.push(OsStr::new("-b"));
            args.push(OsStr::new(branch));
            args.push(OsStr::new(base));
        }
        None => args.push(OsStr::new(branch)),
    }

    run_git_checked(&args, repo_root)
        .with_context(|| format!("Failed to create worktree for '{branch}'"))?;
    Ok(())
}

/// Remove the worktree at `path`
///
/// Runs: git worktree remove [--force] <path>
pub fn remove_worktree(repo_root: &Path, path: &Path, force: bool) -> Result<()> {
    let mut args: Vec<&OsStr> = vec![OsStr::new("worktree"), OsStr::new("remove")];
    if force {
        args.push(OsStr::new("--force"));
    }
    args.push(path.as_os_str());

    run_git_checked(&args, repo_root)
        .with_context(|| format!("Failed to remove worktree {}", path.display()))?;
    Ok(())
}

/// List all worktrees, including the main one
pub fn list_worktrees(repo_root: &Path) -> Result<Vec<WorktreeInfo>> {
    let stdout = run_git_checked(&["worktree", "list", "--porcelain"], repo_root)?;
    Ok(parse_worktree_list(&stdout))
}

/// Human-relative age of the last commit in a worktree ("3 days ago")
pub fn last_commit_age(worktree_path: &Path) -> Result<String> {
    let age = run_git_checked(&["log", "-1", "--format=%cr"], worktree_path)?;
    if age.is_empty() {
        anyhow::bail!("No commits in {}", worktree_path.display());
    }
    Ok(age)
}

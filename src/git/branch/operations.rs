//! Core branch operations: delete, list, current

use anyhow::Result;
use std::path::Path;

use crate::git::runner::run_git_checked;

/// Delete a branch
///
/// `force` uses `-D`, which also deletes branches that are not fully merged.
pub fn delete_branch(name: &str, force: bool, repo_root: &Path) -> Result<()> {
    let flag = if force { "-D" } else { "-d" };

    run_git_checked(&["branch", flag, name], repo_root)?;
    Ok(())
}

/// Name of the branch checked out in `repo_root` (empty when detached)
pub fn current_branch(repo_root: &Path) -> Result<String> {
    run_git_checked(&["branch", "--show-current"], repo_root)
}

/// List local branch names
pub fn list_branches(repo_root: &Path) -> Result<Vec<String>> {
    let stdout = run_git_checked(
        &["branch", "--list", "--format=%(refname:short)"],
        repo_root,
    )?;
    Ok(parse_branch_names(&stdout))
}

pub(crate) fn parse_branch_names(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

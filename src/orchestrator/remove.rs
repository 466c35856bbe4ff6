//! Remove flow

use anyhow::Result;
use std::path::Path;

use super::executor::{run_each, ExecutionMode};
use super::FlowContext;
use crate::git::worktree::{same_path, worktree_path};
use crate::git::WorktreeInfo;
use crate::output;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoveOptions {
    /// Worktrees to remove; empty means pick interactively
    pub names: Vec<String>,
    /// Discard uncommitted changes (double confirmation required)
    pub force: bool,
    pub dry_run: bool,
    pub mode: ExecutionMode,
    pub delete_branch: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// `branch_deleted` is `None` when deletion was not requested
    Removed { branch_deleted: Option<bool> },
    NotFound,
    DryRun,
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub struct RemoveReport {
    pub outcomes: Vec<(String, RemoveOutcome)>,
    pub aborted: bool,
}

impl RemoveReport {
    pub fn outcome(&self, name: &str) -> Option<&RemoveOutcome> {
        self.outcomes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, outcome)| outcome)
    }
}

pub fn run_remove(
    ctx: FlowContext<'_>,
    repo_root: &Path,
    options: &RemoveOptions,
) -> Result<RemoveReport> {
    let mut report = RemoveReport::default();

    let names = if options.names.is_empty() {
        let candidates: Vec<String> = ctx
            .vcs
            .list_worktrees()
            .into_iter()
            .filter_map(|wt| wt.branch)
            .collect();
        if candidates.is_empty() {
            output::warn("No worktrees to remove.");
            return Ok(report);
        }
        let picked = ctx
            .prompter
            .multi_select("Select worktrees to remove", &candidates)?;
        picked
            .into_iter()
            .filter_map(|i| candidates.get(i).cloned())
            .collect()
    } else {
        options.names.clone()
    };

    if names.is_empty() {
        println!("Nothing selected.");
        return Ok(report);
    }

    if options.force && !options.dry_run && !confirm_force(ctx, &names)? {
        println!("Aborted.");
        report.aborted = true;
        return Ok(report);
    }

    let outcomes = run_each(&names, options.mode, |name| {
        remove_one(ctx, repo_root, name, options)
    });
    report.outcomes = names.into_iter().zip(outcomes).collect();

    Ok(report)
}

fn confirm_force(ctx: FlowContext<'_>, names: &[String]) -> Result<bool> {
    output::warn(format!(
        "Force removal discards uncommitted changes in: {}",
        names.join(", ")
    ));
    if !ctx
        .prompter
        .confirm("Are you sure you want to force-remove these worktrees?", false)?
    {
        return Ok(false);
    }
    let typed = ctx.prompter.input("Type 'yes' to confirm", None)?;
    Ok(typed == "yes")
}

fn find_worktree(worktrees: Vec<WorktreeInfo>, repo_root: &Path, name: &str) -> Option<WorktreeInfo> {
    let expected = worktree_path(repo_root, name);
    worktrees
        .into_iter()
        .find(|wt| wt.branch.as_deref() == Some(name) || same_path(&wt.path, &expected))
}

fn remove_one(
    ctx: FlowContext<'_>,
    repo_root: &Path,
    name: &str,
    options: &RemoveOptions,
) -> RemoveOutcome {
    let Some(worktree) = find_worktree(ctx.vcs.list_worktrees(), repo_root, name) else {
        output::warn(format!("Worktree '{name}' not found. Skipping."));
        return RemoveOutcome::NotFound;
    };

    if options.dry_run {
        output::dry_run(format!("Would remove worktree: {}", worktree.path.display()));
        if options.delete_branch {
            if let Some(branch) = &worktree.branch {
                output::dry_run(format!("Would delete branch: {branch}"));
            }
        }
        return RemoveOutcome::DryRun;
    }

    if let Err(e) = ctx.vcs.remove_worktree(&worktree.path, options.force) {
        output::failure(format!("Failed to remove '{name}': {e:#}"));
        return RemoveOutcome::Failed(format!("{e:#}"));
    }
    output::success(format!("Removed worktree: {name}"));

    if !options.delete_branch {
        return RemoveOutcome::Removed {
            branch_deleted: None,
        };
    }

    let Some(branch) = worktree.branch else {
        output::warn(format!("Worktree '{name}' has no branch to delete."));
        return RemoveOutcome::Removed {
            branch_deleted: Some(false),
        };
    };

    let deleted = match ctx.vcs.delete_branch(&branch, options.force) {
        Ok(()) => {
            output::success(format!("Deleted branch: {branch}"));
            true
        }
        Err(e) => {
            tracing::warn!(branch = %branch, error = %e, "branch deletion failed");
            output::warn(format!("Could not delete branch '{branch}': {e:#}"));
            false
        }
    };

    RemoveOutcome::Removed {
        branch_deleted: Some(deleted),
    }
}

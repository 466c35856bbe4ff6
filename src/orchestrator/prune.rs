//! Prune flow: remove worktrees whose branch no longer exists

use anyhow::{Context, Result};

use crate::git::Vcs;
use crate::output;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PruneOptions {
    pub auto: bool,
    pub dry_run: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PruneReport {
    /// Branch names of every orphaned worktree found
    pub orphaned: Vec<String>,
    pub pruned: Vec<String>,
    pub failed: Vec<String>,
}

/// Find and remove orphaned worktrees.
///
/// Only worktrees with a branch are candidates; detached ones are left alone.
/// A failed removal is reported and the rest still run. If the branch list
/// cannot be read, nothing is removed.
pub fn run_prune(vcs: &dyn Vcs, options: PruneOptions) -> Result<PruneReport> {
    let mut report = PruneReport::default();

    if !options.auto {
        output::info("Manual prune is not implemented yet.");
        println!("   Use 'branchyard prune --auto' to remove worktrees whose branch no longer exists.");
        return Ok(report);
    }

    let branches = vcs
        .try_list_branches()
        .context("Failed to list branches; nothing was pruned")?;
    let orphaned: Vec<_> = vcs
        .list_worktrees()
        .into_iter()
        .filter(|wt| {
            wt.branch
                .as_ref()
                .is_some_and(|branch| !branches.contains(branch))
        })
        .collect();

    if orphaned.is_empty() {
        output::success("No orphaned worktrees found.");
        return Ok(report);
    }

    for wt in orphaned {
        let branch = wt.branch_label().to_string();
        report.orphaned.push(branch.clone());

        if options.dry_run {
            output::dry_run(format!(
                "Would remove orphaned worktree: {} ({branch})",
                wt.path.display()
            ));
            continue;
        }

        match vcs.remove_worktree(&wt.path, true) {
            Ok(()) => {
                output::success(format!("Pruned {} ({branch})", wt.path.display()));
                report.pruned.push(branch);
            }
            Err(e) => {
                output::failure(format!("Failed to prune {}: {e:#}", wt.path.display()));
                report.failed.push(branch);
            }
        }
    }

    Ok(report)
}

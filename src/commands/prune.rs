//! Prune orphaned worktrees
//! Usage: branchyard prune [--auto] [--dry-run]

use anyhow::Result;

use super::common::Environment;
use crate::orchestrator::{run_prune, PruneOptions};
use crate::output;
use crate::preflight::PreflightOptions;

pub fn execute(env: &Environment, options: PruneOptions) -> Result<()> {
    env.repo_root(PreflightOptions::default())?;

    let report = run_prune(&env.vcs, options)?;
    if report.orphaned.is_empty() {
        return Ok(());
    }

    if options.dry_run {
        output::dry_run(format!(
            "{} orphaned worktree(s) would be removed",
            report.orphaned.len()
        ));
    } else {
        output::success(format!(
            "Pruned {} orphaned worktree(s)",
            report.pruned.len()
        ));
        if !report.failed.is_empty() {
            output::warn(format!("Could not prune: {}", report.failed.join(", ")));
        }
    }
    Ok(())
}

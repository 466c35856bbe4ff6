//! Remove worktrees
//! Usage: branchyard --remove [names...] [--force] [--dry-run] [--sequential] [--delete-branch]

use anyhow::Result;

use super::common::Environment;
use crate::orchestrator::{run_remove, RemoveOptions, RemoveOutcome};
use crate::output;
use crate::preflight::PreflightOptions;

pub fn execute(env: &Environment, options: RemoveOptions, allow_subdir: bool) -> Result<()> {
    let root = env.repo_root(PreflightOptions {
        show_info: true,
        allow_subdir,
    })?;
    println!();

    let report = run_remove(env.context(), &root, &options)?;
    if report.aborted || report.outcomes.is_empty() {
        return Ok(());
    }

    let removed = report
        .outcomes
        .iter()
        .filter(|(_, o)| matches!(o, RemoveOutcome::Removed { .. }))
        .count();

    println!();
    if options.dry_run {
        output::success("Dry run complete!");
    } else {
        output::success(format!("Removed {removed} worktree(s)"));
    }
    Ok(())
}

//! Create worktrees
//! Usage: branchyard <names...> [--base <branch>] [--no-create] [--open] [--dry-run] [--sequential]

use anyhow::Result;

use super::common::Environment;
use crate::orchestrator::{run_create, CreateOptions, CreateOutcome};
use crate::output;
use crate::preflight::PreflightOptions;

pub fn execute(env: &Environment, options: CreateOptions, allow_subdir: bool) -> Result<()> {
    let root = env.repo_root(PreflightOptions {
        show_info: true,
        allow_subdir,
    })?;

    if options.dry_run {
        output::dry_run("No changes will be made");
    }
    println!();

    let report = run_create(env.context(), &root, &options)?;

    let failed = report
        .outcomes
        .iter()
        .filter(|(_, o)| matches!(o, CreateOutcome::Failed(_)))
        .count();
    if failed > 0 {
        output::warn(format!("{failed} worktree(s) could not be created"));
    }

    Ok(())
}

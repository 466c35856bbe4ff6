//! List worktrees
//! Usage: branchyard list

use anyhow::Result;
use colored::Colorize;
use std::fmt::Write as _;
use std::path::Path;

use super::common::{display_relative, Environment};
use crate::git::worktree::is_legacy_location;
use crate::git::{Vcs, WorktreeInfo};
use crate::output;
use crate::preflight::PreflightOptions;

pub fn execute(env: &Environment) -> Result<()> {
    let root = env.repo_root(PreflightOptions::default())?;

    let entries: Vec<(WorktreeInfo, String)> = env
        .vcs
        .list_worktrees()
        .into_iter()
        .map(|wt| {
            let age = commit_age(&env.vcs, &wt);
            (wt, age)
        })
        .collect();

    print!("{}", render(&root, &entries));
    Ok(())
}

fn commit_age(vcs: &dyn Vcs, wt: &WorktreeInfo) -> String {
    vcs.last_commit_age(&wt.path).unwrap_or_else(|e| {
        tracing::warn!(path = %wt.path.display(), "Failed to read last commit age: {e:#}");
        "unknown".to_string()
    })
}

fn render(root: &Path, entries: &[(WorktreeInfo, String)]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "Active worktrees:".bold());
    let _ = writeln!(out, "{}", output::rule().dimmed());

    if entries.is_empty() {
        let _ = writeln!(out, "(no worktrees found)");
        let _ = writeln!(out, "Create one with: branchyard <name>");
        return out;
    }

    for (wt, age) in entries {
        let tag = if is_legacy_location(root, &wt.path) {
            format!(" {}", "(legacy location)".yellow())
        } else {
            String::new()
        };
        let _ = writeln!(out, "{} {}{tag}", "●".green(), wt.branch_label().cyan().bold());
        let _ = writeln!(out, "   Path:        {}", display_relative(root, &wt.path));
        let _ = writeln!(out, "   Commit:      {}", wt.short_commit());
        let _ = writeln!(out, "   Last commit: {age}");
    }
    let _ = writeln!(out, "{}", output::rule().dimmed());
    let _ = writeln!(out, "Total: {} worktree(s)", entries.len());
    out
}

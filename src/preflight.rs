//! Pre-flight checks run before any worktree operation
//!
//! 1. `git` must be on PATH
//! 2. The target directory must be inside a repository
//! 3. Optionally print cwd / repo root / branch, warning when not at the root

use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::error::BranchyardError;
use crate::git::{repo, worktree::same_path, Vcs};

#[derive(Debug, Clone, Copy, Default)]
pub struct PreflightOptions {
    /// Print the informational block
    pub show_info: bool,
    /// Suppress the not-at-root warning
    pub allow_subdir: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreflightReport {
    pub dir: PathBuf,
    pub repo_root: Option<PathBuf>,
    pub branch: String,
    /// `dir` is not the repository root
    pub in_subdir: bool,
}

impl PreflightReport {
    /// Repository root, falling back to the checked directory
    pub fn root(&self) -> &Path {
        self.repo_root.as_deref().unwrap_or(&self.dir)
    }
}

/// Run the checks against `dir`
pub fn preflight_check(vcs: &dyn Vcs, dir: &Path, options: PreflightOptions) -> Result<PreflightReport> {
    evaluate(repo::git_available(), vcs, dir, options)
}

fn evaluate(
    git_found: bool,
    vcs: &dyn Vcs,
    dir: &Path,
    options: PreflightOptions,
) -> Result<PreflightReport> {
    if !git_found {
        return Err(BranchyardError::GitNotInstalled.into());
    }

    if !vcs.is_repo() {
        return Err(BranchyardError::NotARepository(dir.to_path_buf()).into());
    }

    let repo_root = vcs.repo_root();
    let in_subdir = repo_root
        .as_deref()
        .is_some_and(|root| !same_path(root, dir));

    let report = PreflightReport {
        dir: dir.to_path_buf(),
        repo_root,
        branch: vcs.current_branch(),
        in_subdir,
    };

    if options.show_info {
        println!("{}", "Pre-flight check:".bold());
        println!("   Current directory: {}", report.dir.display());
        println!(
            "   Repository root: {}",
            report
                .repo_root
                .as_deref()
                .map_or_else(|| "unknown".to_string(), |p| p.display().to_string())
        );
        println!("   Current branch: {}", report.branch.cyan());

        if report.in_subdir && !options.allow_subdir {
            eprintln!();
            eprintln!("{} Not in repository root!", "⚠".yellow().bold());
            eprintln!("   This may cause unexpected behavior.");
            eprintln!("   Use --allow-subdir to suppress this warning.");
            eprintln!();
        }
    }

    Ok(report)
}

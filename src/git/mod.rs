//! Git operations for branchyard worktree management
//!
//! This module provides:
//! - The `Vcs` trait, the only surface the orchestrator talks to
//! - `GitCli`, which implements it by shelling out to `git`
//! - Porcelain parsing and path conventions for `.worktrees/`

pub mod branch;
pub mod repo;
pub mod runner;
pub mod worktree;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use worktree::WorktreeInfo;

/// Operations against the external version-control tool.
///
/// Query methods fail soft: implementations log the failure and return an
/// empty or sentinel value. Mutating methods propagate errors to the caller.
pub trait Vcs: Send + Sync {
    /// Linked worktrees, excluding the main worktree and bare entries
    fn list_worktrees(&self) -> Vec<WorktreeInfo>;

    /// Branches checked out in any worktree, the main worktree included
    fn checked_out_branches(&self) -> Vec<String>;

    /// Local branch names, propagating failures
    fn try_list_branches(&self) -> Result<Vec<String>>;

    /// Local branch names
    fn list_branches(&self) -> Vec<String> {
        self.try_list_branches().unwrap_or_else(|e| {
            tracing::warn!("Failed to get branches: {e:#}");
            Vec::new()
        })
    }

    /// Create a worktree. `base = Some` creates `branch` from it; `None`
    /// checks out the already existing `branch`.
    fn add_worktree(&self, path: &Path, branch: &str, base: Option<&str>) -> Result<()>;

    /// Remove a worktree, discarding uncommitted changes when `force` is set
    fn remove_worktree(&self, path: &Path, force: bool) -> Result<()>;

    /// Delete a local branch
    fn delete_branch(&self, name: &str, force: bool) -> Result<()>;

    fn is_repo(&self) -> bool;

    fn repo_root(&self) -> Option<PathBuf>;

    /// Current branch, `"unknown"` when it cannot be determined
    fn current_branch(&self) -> String;

    /// Relative age of the last commit in the worktree at `path`
    fn last_commit_age(&self, path: &Path) -> Result<String>;
}

/// `Vcs` backed by the `git` command line, anchored at an explicit directory
#[derive(Debug, Clone)]
pub struct GitCli {
    dir: PathBuf,
}

impl GitCli {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Vcs for GitCli {
    fn list_worktrees(&self) -> Vec<WorktreeInfo> {
        let all = match worktree::list_worktrees(&self.dir) {
            Ok(all) => all,
            Err(e) => {
                tracing::warn!("Failed to get worktrees: {e:#}");
                return Vec::new();
            }
        };

        let root = self.repo_root();
        all.into_iter()
            .filter(|wt| !wt.is_bare)
            .filter(|wt| !worktree::same_path(&wt.path, &self.dir))
            .filter(|wt| {
                root.as_deref()
                    .is_none_or(|root| !worktree::same_path(&wt.path, root))
            })
            .collect()
    }

    fn checked_out_branches(&self) -> Vec<String> {
        match worktree::list_worktrees(&self.dir) {
            Ok(all) => all
                .into_iter()
                .filter(|wt| !wt.is_bare)
                .filter_map(|wt| wt.branch)
                .collect(),
            Err(e) => {
                tracing::warn!("Failed to get worktrees: {e:#}");
                Vec::new()
            }
        }
    }

    fn try_list_branches(&self) -> Result<Vec<String>> {
        branch::list_branches(&self.dir)
    }

    fn add_worktree(&self, path: &Path, branch: &str, base: Option<&str>) -> Result<()> {
        worktree::add_worktree(&self.dir, path, branch, base)
    }

    fn remove_worktree(&self, path: &Path, force: bool) -> Result<()> {
        worktree::remove_worktree(&self.dir, path, force)
    }

    fn delete_branch(&self, name: &str, force: bool) -> Result<()> {
        branch::delete_branch(name, force, &self.dir)
    }

    fn is_repo(&self) -> bool {
        repo::is_repo(&self.dir)
    }

    fn repo_root(&self) -> Option<PathBuf> {
        repo::repo_root(&self.dir)
            .map_err(|e| tracing::debug!("No repository root for {}: {e:#}", self.dir.display()))
            .ok()
    }

    fn current_branch(&self) -> String {
        match branch::current_branch(&self.dir) {
            Ok(name) if !name.is_empty() => name,
            Ok(_) => "unknown".to_string(),
            Err(e) => {
                tracing::debug!("Failed to read current branch: {e:#}");
                "unknown".to_string()
            }
        }
    }

    fn last_commit_age(&self, path: &Path) -> Result<String> {
        worktree::last_commit_age(path)
    }
}

//! Worktree output parsing
//!
//! Parses `git worktree list --porcelain` output into structured records.
//!
//! Grammar: records are separated by blank lines. Each record starts with a
//! `worktree <path>` line, followed by optional attribute lines:
//!
//! - `HEAD <sha>` -> commit
//! - `branch refs/heads/<name>` -> branch (prefix stripped)
//! - `detached` -> no branch
//! - `bare` -> bare repository entry
//!
//! Any other line (`locked`, `prunable <reason>`, ...) is ignored. A new
//! `worktree` line also closes the previous record, so a missing blank line
//! does not merge two entries.

use std::path::PathBuf;

/// One working tree as reported by git
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorktreeInfo {
    pub path: PathBuf,
    pub commit: String,
    pub branch: Option<String>,
    pub is_bare: bool,
}

impl WorktreeInfo {
    fn new(path: &str) -> Self {
        Self {
            path: PathBuf::from(path),
            commit: String::new(),
            branch: None,
            is_bare: false,
        }
    }

    /// Branch name, or `(detached)` for worktrees without one
    pub fn branch_label(&self) -> &str {
        self.branch.as_deref().unwrap_or("(detached)")
    }

    /// First 7 characters of the commit hash
    pub fn short_commit(&self) -> &str {
        let end = self
            .commit
            .char_indices()
            .nth(7)
            .map_or(self.commit.len(), |(i, _)| i);
        &self.commit[..end]
    }
}

/// Parse git worktree list --porcelain output
///
/// Example input:
/// ```text
/// worktree /home/user/repo
/// HEAD abc123def456
/// branch refs/heads/main
///
/// worktree /home/user/repo/.worktrees/feature-x
/// HEAD def789abc012
/// branch refs/heads/feature-x
/// ```
pub fn parse_worktree_list(output: &str) -> Vec<WorktreeInfo> {
    let mut worktrees = Vec::new();
    let mut current: Option<WorktreeInfo> = None;

    for line in output.lines() {
        let line = line.trim_end_matches('\r');

        if line.is_empty() {
            if let Some(wt) = current.take() {
                worktrees.push(wt);
            }
            continue;
        }

        if let Some(path) = line.strip_prefix("worktree ") {
            if let Some(wt) = current.take() {
                worktrees.push(wt);
            }
            current = Some(WorktreeInfo::new(path));
            continue;
        }

        let Some(wt) = current.as_mut() else {
            continue;
        };

        if let Some(head) = line.strip_prefix("HEAD ") {
            wt.commit = head.to_string();
        } else if let Some(branch_ref) = line.strip_prefix("branch ") {
            let name = branch_ref.strip_prefix("refs/heads/").unwrap_or(branch_ref);
            wt.branch = Some(name.to_string());
        } else if line == "detached" {
            wt.branch = None;
        } else if line == "bare" {
            wt.is_bare = true;
        }
    }

    if let Some(wt) = current {
        worktrees.push(wt);
    }

    worktrees
}

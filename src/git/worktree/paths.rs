//! Path conventions for worktrees
//!
//! Current layout: `<repo>/.worktrees/<name>`.
//! Legacy layout: `<repo>/../<name>` (siblings of the repository).

use std::path::{Path, PathBuf};

/// Directory holding all managed worktrees
pub const WORKTREES_DIR: &str = ".worktrees";

/// `<repo>/.worktrees`
pub fn worktrees_dir(repo_root: &Path) -> PathBuf {
    repo_root.join(WORKTREES_DIR)
}

/// `<repo>/.worktrees/<name>`
pub fn worktree_path(repo_root: &Path, name: &str) -> PathBuf {
    worktrees_dir(repo_root).join(name)
}

/// Path `.worktrees/<name>` relative to the repository, as written into the
/// workspace file
pub fn relative_worktree_path(name: &str) -> String {
    format!("{WORKTREES_DIR}/{name}")
}

/// Where the legacy layout would have placed `<name>`
pub fn legacy_worktree_path(repo_root: &Path, name: &str) -> Option<PathBuf> {
    repo_root.parent().map(|parent| parent.join(name))
}

/// True when `path` is a direct sibling of the repository directory
pub fn is_legacy_location(repo_root: &Path, path: &Path) -> bool {
    let repo = canonical(repo_root);
    let path = canonical(path);
    match (repo.parent(), path.parent()) {
        (Some(a), Some(b)) => a == b && repo != path,
        _ => false,
    }
}

/// Compare two paths after resolving symlinks where possible
pub fn same_path(a: &Path, b: &Path) -> bool {
    canonical(a) == canonical(b)
}

fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

//! Git worktree management
//!
//! Worktrees are created in .worktrees/{name}/ directories.
//!
//! ## Module structure
//!
//! - `operations`: add, remove, list
//! - `parser`: porcelain output parsing
//! - `paths`: current and legacy directory layout

mod operations;
mod parser;
mod paths;

pub use operations::{add_worktree, last_commit_age, list_worktrees, remove_worktree};
pub use parser::{parse_worktree_list, WorktreeInfo};
pub use paths::{
    is_legacy_location, legacy_worktree_path, relative_worktree_path, same_path, worktree_path,
    worktrees_dir, WORKTREES_DIR,
};

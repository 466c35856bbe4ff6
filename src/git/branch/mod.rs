//! Git branch operations

mod operations;

pub use operations::{current_branch, delete_branch, list_branches};

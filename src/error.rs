//! Fatal error kinds
//!
//! Everything that must stop the process with exit code 1 is one of these.
//! They travel inside `anyhow::Error` and are rendered by `main`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BranchyardError {
    #[error("Git is not installed or not in PATH. Please install Git: https://git-scm.com/")]
    GitNotInstalled,

    #[error("Not in a Git repository: {0}. Please run branchyard from inside a Git repository.")]
    NotARepository(PathBuf),

    #[error("Invalid config file {path}: {reason}. Please fix or delete it.")]
    InvalidConfig { path: PathBuf, reason: String },

    #[error("Invalid sessions file {path}: {reason}. Please fix or delete it.")]
    InvalidSessions { path: PathBuf, reason: String },

    #[error("{0} required.")]
    MissingArgument(&'static str),

    #[error("Unknown editor: {0}")]
    UnknownEditor(String),

    #[error("The editor CLI '{command}' for {editor} is not installed or not in your PATH.")]
    EditorNotInstalled { editor: String, command: String },

    #[error("Session '{0}' not found.")]
    SessionNotFound(String),

    #[error("Cannot determine home directory")]
    NoHomeDirectory,
}

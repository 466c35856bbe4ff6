//! Worktree orchestration: the create, remove and prune flows
//!
//! Flows receive everything they touch through `FlowContext` and an explicit
//! repository root. Nothing here changes the process working directory.

pub mod create;
pub mod executor;
pub mod launch;
pub mod prune;
pub mod remove;
pub mod workspace;

#[cfg(test)]
pub(crate) mod testing;

use crate::config::ConfigStore;
use crate::git::Vcs;
use crate::prompt::Prompter;
use crate::sessions::SessionStore;

pub use create::{run_create, CreateOptions, CreateOutcome, CreateReport, SkipReason};
pub use executor::{run_each, ExecutionMode};
pub use launch::{open_workspace, EditorLauncher, SystemLauncher};
pub use prune::{run_prune, PruneOptions, PruneReport};
pub use remove::{run_remove, RemoveOptions, RemoveOutcome, RemoveReport};
pub use workspace::{compose_workspace, WORKSPACE_FILE};

/// Collaborators shared by all flows
#[derive(Clone, Copy)]
pub struct FlowContext<'a> {
    pub vcs: &'a dyn Vcs,
    pub prompter: &'a dyn Prompter,
    pub config: &'a ConfigStore,
    pub sessions: &'a SessionStore,
    pub launcher: &'a dyn EditorLauncher,
}

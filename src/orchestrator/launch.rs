//! Opening the workspace in an editor

use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::Command;

use crate::config::EditorRegistry;
use crate::error::BranchyardError;

/// Starts editor processes
pub trait EditorLauncher: Send + Sync {
    /// Whether `command` resolves on PATH
    fn is_installed(&self, command: &str) -> bool;

    /// Run `command <workspace>` and wait for it to return
    fn launch(&self, command: &str, workspace: &Path) -> Result<()>;
}

/// Launches editors as child processes
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl EditorLauncher for SystemLauncher {
    fn is_installed(&self, command: &str) -> bool {
        which::which(command).is_ok()
    }

    fn launch(&self, command: &str, workspace: &Path) -> Result<()> {
        let mut cmd = Command::new(command);
        cmd.arg(workspace);
        if let Some(dir) = workspace.parent() {
            cmd.current_dir(dir);
        }

        let status = cmd
            .status()
            .with_context(|| format!("Failed to launch {command}"))?;
        if !status.success() {
            bail!("{command} exited with {status}");
        }
        Ok(())
    }
}

/// Resolve `editor` in the registry and open `workspace` with it.
///
/// Unknown editors and editors whose CLI is missing are fatal.
pub fn open_workspace(
    launcher: &dyn EditorLauncher,
    registry: &EditorRegistry,
    editor: &str,
    workspace: &Path,
) -> Result<()> {
    let command = registry
        .command_for(editor)
        .ok_or_else(|| BranchyardError::UnknownEditor(editor.to_string()))?;

    if !launcher.is_installed(command) {
        return Err(BranchyardError::EditorNotInstalled {
            editor: editor.to_string(),
            command: command.to_string(),
        }
        .into());
    }

    tracing::debug!(editor, command, workspace = %workspace.display(), "launching editor");
    launcher.launch(command, workspace)
}

//! Shared setup for command implementations.
//!
//! Every command works on an `Environment`: the repository directory
//! (from `--cwd` or the process working directory), the git adapter anchored
//! there, both stores, and the prompt/launch boundaries.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::ConfigStore;
use crate::git::GitCli;
use crate::orchestrator::{EditorLauncher, FlowContext, SystemLauncher};
use crate::preflight::{preflight_check, PreflightOptions};
use crate::prompt::{Prompter, TerminalPrompter};
use crate::sessions::SessionStore;

pub struct Environment {
    pub dir: PathBuf,
    pub vcs: GitCli,
    pub prompter: Box<dyn Prompter>,
    pub config: ConfigStore,
    pub sessions: SessionStore,
    pub launcher: Box<dyn EditorLauncher>,
}

impl Environment {
    /// Terminal prompts, real editor launches and the default store paths
    pub fn from_cwd(cwd: Option<PathBuf>) -> Result<Self> {
        let dir = resolve_dir(cwd)?;
        Ok(Self::new(
            dir,
            Box::new(TerminalPrompter::new()),
            ConfigStore::open_default()?,
            SessionStore::open_default()?,
            Box::new(SystemLauncher),
        ))
    }

    pub fn new(
        dir: PathBuf,
        prompter: Box<dyn Prompter>,
        config: ConfigStore,
        sessions: SessionStore,
        launcher: Box<dyn EditorLauncher>,
    ) -> Self {
        Self {
            vcs: GitCli::new(&dir),
            dir,
            prompter,
            config,
            sessions,
            launcher,
        }
    }

    pub fn context(&self) -> FlowContext<'_> {
        FlowContext {
            vcs: &self.vcs,
            prompter: self.prompter.as_ref(),
            config: &self.config,
            sessions: &self.sessions,
            launcher: self.launcher.as_ref(),
        }
    }

    /// Run the pre-flight checks and return the repository root
    pub fn repo_root(&self, options: PreflightOptions) -> Result<PathBuf> {
        let report = preflight_check(&self.vcs, &self.dir, options)?;
        Ok(report.root().to_path_buf())
    }
}

fn resolve_dir(cwd: Option<PathBuf>) -> Result<PathBuf> {
    match cwd {
        Some(dir) => {
            if !dir.is_dir() {
                anyhow::bail!("Directory does not exist: {}", dir.display());
            }
            Ok(dir)
        }
        None => std::env::current_dir().context("Failed to read the current directory"),
    }
}

/// `path` relative to `root` when it lies inside it
pub fn display_relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

//! In-memory `Vcs` and `EditorLauncher` for flow tests

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::launch::EditorLauncher;
use crate::git::worktree::{same_path, worktree_path};
use crate::git::{Vcs, WorktreeInfo};

#[derive(Default)]
struct State {
    worktrees: Vec<WorktreeInfo>,
    branches: Vec<String>,
    calls: Vec<String>,
}

/// Records mutating calls and mirrors them on disk (directories only)
pub struct FakeVcs {
    root: PathBuf,
    is_repo: bool,
    fail_branch_delete: bool,
    fail_branch_list: bool,
    fail_add: Vec<String>,
    state: Mutex<State>,
}

impl FakeVcs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            is_repo: true,
            fail_branch_delete: false,
            fail_branch_list: false,
            fail_add: Vec::new(),
            state: Mutex::new(State {
                branches: vec!["main".to_string()],
                ..Default::default()
            }),
        }
    }

    pub fn not_a_repo(mut self) -> Self {
        self.is_repo = false;
        self
    }

    pub fn failing_branch_delete(mut self) -> Self {
        self.fail_branch_delete = true;
        self
    }

    pub fn failing_branch_list(mut self) -> Self {
        self.fail_branch_list = true;
        self
    }

    pub fn failing_add(mut self, name: &str) -> Self {
        self.fail_add.push(name.to_string());
        self
    }

    pub fn with_branch(self, name: &str) -> Self {
        self.state.lock().unwrap().branches.push(name.to_string());
        self
    }

    /// A worktree on `branch` at `.worktrees/<branch>`, with its directory
    pub fn with_worktree(self, branch: &str) -> Self {
        let path = worktree_path(&self.root, branch);
        std::fs::create_dir_all(&path).unwrap();
        {
            let mut state = self.state.lock().unwrap();
            state.worktrees.push(WorktreeInfo {
                path,
                commit: "0123456789abcdef".to_string(),
                branch: Some(branch.to_string()),
                is_bare: false,
            });
            if !state.branches.iter().any(|b| b == branch) {
                state.branches.push(branch.to_string());
            }
        }
        self
    }

    /// Drop a branch ref while its worktree stays registered
    pub fn forget_branch(self, name: &str) -> Self {
        self.state.lock().unwrap().branches.retain(|b| b != name);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }
}

impl Vcs for FakeVcs {
    fn list_worktrees(&self) -> Vec<WorktreeInfo> {
        self.state.lock().unwrap().worktrees.clone()
    }

    /// The main worktree is always on `main`
    fn checked_out_branches(&self) -> Vec<String> {
        let state = self.state.lock().unwrap();
        std::iter::once("main".to_string())
            .chain(state.worktrees.iter().filter_map(|wt| wt.branch.clone()))
            .collect()
    }

    fn try_list_branches(&self) -> Result<Vec<String>> {
        if self.fail_branch_list {
            bail!("fatal: not a git repository");
        }
        Ok(self.state.lock().unwrap().branches.clone())
    }

    fn add_worktree(&self, path: &Path, branch: &str, base: Option<&str>) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state
            .calls
            .push(format!("add {branch} base={}", base.unwrap_or("-")));
        if self.fail_add.iter().any(|n| n == branch) {
            bail!("fatal: invalid reference: {}", base.unwrap_or(branch));
        }
        std::fs::create_dir_all(path)?;
        state.worktrees.push(WorktreeInfo {
            path: path.to_path_buf(),
            commit: "fedcba9876543210".to_string(),
            branch: Some(branch.to_string()),
            is_bare: false,
        });
        if !state.branches.iter().any(|b| b == branch) {
            state.branches.push(branch.to_string());
        }
        Ok(())
    }

    fn remove_worktree(&self, path: &Path, force: bool) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state
            .calls
            .push(format!("remove {} force={force}", path.display()));
        state.worktrees.retain(|wt| !same_path(&wt.path, path));
        if path.exists() {
            std::fs::remove_dir_all(path)?;
        }
        Ok(())
    }

    fn delete_branch(&self, name: &str, force: bool) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(format!("delete-branch {name} force={force}"));
        if self.fail_branch_delete {
            bail!("error: branch '{name}' not found");
        }
        state.branches.retain(|b| b != name);
        Ok(())
    }

    fn is_repo(&self) -> bool {
        self.is_repo
    }

    fn repo_root(&self) -> Option<PathBuf> {
        self.is_repo.then(|| self.root.clone())
    }

    fn current_branch(&self) -> String {
        "main".to_string()
    }

    fn last_commit_age(&self, _path: &Path) -> Result<String> {
        Ok("2 hours ago".to_string())
    }
}

/// Records launches instead of starting processes
pub struct FakeLauncher {
    installed: Vec<String>,
    launched: Mutex<Vec<String>>,
}

impl FakeLauncher {
    pub fn with_installed(commands: &[&str]) -> Self {
        Self {
            installed: commands.iter().map(|c| (*c).to_string()).collect(),
            launched: Mutex::new(Vec::new()),
        }
    }

    pub fn launched(&self) -> Vec<String> {
        self.launched.lock().unwrap().clone()
    }
}

impl EditorLauncher for FakeLauncher {
    fn is_installed(&self, command: &str) -> bool {
        self.installed.iter().any(|c| c == command)
    }

    fn launch(&self, command: &str, workspace: &Path) -> Result<()> {
        self.launched
            .lock()
            .unwrap()
            .push(format!("{command} {}", workspace.display()));
        Ok(())
    }
}

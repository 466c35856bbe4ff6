//! Test helper functions for E2E tests

use anyhow::{bail, Context, Result};
use branchyard::commands::common::Environment;
use branchyard::config::{Config, ConfigStore};
use branchyard::orchestrator::EditorLauncher;
use branchyard::prompt::ScriptedPrompter;
use branchyard::sessions::SessionStore;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// A repository at `<temp>/repo` on branch `main` with one commit.
///
/// The stores live next to it in `<temp>`. Keep the value in scope for the
/// lifetime of the test.
pub struct TestRepo {
    _temp: TempDir,
    pub root: PathBuf,
    pub config_path: PathBuf,
    pub sessions_path: PathBuf,
}

impl TestRepo {
    pub fn config(&self) -> ConfigStore {
        ConfigStore::at(&self.config_path)
    }

    pub fn sessions(&self) -> SessionStore {
        SessionStore::at(&self.sessions_path)
    }

    /// Persist `editor` as the default so flows don't ask for one
    pub fn with_default_editor(self, editor: &str) -> Self {
        self.config()
            .save(&Config {
                default_editor: Some(editor.to_string()),
                ..Default::default()
            })
            .expect("save config");
        self
    }

    /// Environment answering prompts from `answers`, launching editors into `launcher`
    pub fn env<I, S>(&self, answers: I, launcher: RecordingLauncher) -> Environment
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Environment::new(
            self.root.clone(),
            Box::new(ScriptedPrompter::new(answers)),
            self.config(),
            self.sessions(),
            Box::new(launcher),
        )
    }

    pub fn git(&self, args: &[&str]) -> Result<String> {
        git_in(&self.root, args)
    }

    /// Local branch names
    pub fn branches(&self) -> Result<Vec<String>> {
        Ok(self
            .git(&["branch", "--list", "--format=%(refname:short)"])?
            .lines()
            .map(str::to_string)
            .collect())
    }
}

/// Creates a temporary git repository with initial commit
pub fn create_temp_git_repo() -> Result<TestRepo> {
    let temp = TempDir::new().context("Failed to create temp directory")?;
    let root = temp.path().join("repo");
    std::fs::create_dir_all(&root).context("Failed to create repo directory")?;
    let root = root.canonicalize()?;

    git_in(&root, &["init", "--quiet"])?;
    git_in(&root, &["symbolic-ref", "HEAD", "refs/heads/main"])?;
    git_in(&root, &["config", "user.email", "test@test.com"])?;
    git_in(&root, &["config", "user.name", "Test User"])?;
    git_in(&root, &["config", "commit.gpgsign", "false"])?;

    std::fs::write(root.join("README.md"), "# Test Repository\n")
        .context("Failed to write README.md")?;
    git_in(&root, &["add", "."])?;
    git_in(&root, &["commit", "--quiet", "-m", "Initial commit"])?;

    Ok(TestRepo {
        config_path: temp.path().join("branchyardrc.json"),
        sessions_path: temp.path().join("sessions.json"),
        root,
        _temp: temp,
    })
}

/// Run git in `dir`, failing on a non-zero exit
pub fn git_in(dir: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .with_context(|| format!("Failed to run git {}", args.join(" ")))?;
    if !output.status.success() {
        bail!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Commit a new file inside the worktree at `dir`
pub fn commit_file(dir: &Path, file: &str, contents: &str) -> Result<()> {
    std::fs::write(dir.join(file), contents)?;
    git_in(dir, &["add", file])?;
    git_in(dir, &["commit", "--quiet", "-m", &format!("Add {file}")])?;
    Ok(())
}

/// Records launches instead of starting editors
#[derive(Clone, Default)]
pub struct RecordingLauncher {
    installed: Vec<String>,
    launched: Arc<Mutex<Vec<(String, PathBuf)>>>,
}

impl RecordingLauncher {
    pub fn with_installed(commands: &[&str]) -> Self {
        Self {
            installed: commands.iter().map(|c| (*c).to_string()).collect(),
            launched: Arc::default(),
        }
    }

    pub fn launched(&self) -> Vec<(String, PathBuf)> {
        self.launched.lock().unwrap().clone()
    }
}

impl EditorLauncher for RecordingLauncher {
    fn is_installed(&self, command: &str) -> bool {
        self.installed.iter().any(|c| c == command)
    }

    fn launch(&self, command: &str, workspace: &Path) -> Result<()> {
        self.launched
            .lock()
            .unwrap()
            .push((command.to_string(), workspace.to_path_buf()));
        Ok(())
    }
}

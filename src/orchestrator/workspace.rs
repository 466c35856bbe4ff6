//! Editor workspace file
//!
//! `{"folders": [{"path": ".worktrees/<name>"}, ...]}` shallow-merged with the
//! configured template. Template keys are copied over the derived object, so
//! a template `folders` replaces the derived list.

use anyhow::{Context, Result};
use serde_json::{json, Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

use crate::git::worktree::relative_worktree_path;

/// Generated file name, written at the repository root
pub const WORKSPACE_FILE: &str = "parallel-dev.code-workspace";

pub fn workspace_path(repo_root: &Path) -> PathBuf {
    repo_root.join(WORKSPACE_FILE)
}

/// Build the workspace object for `names`
pub fn compose_workspace(names: &[String], template: Option<&Map<String, Value>>) -> Map<String, Value> {
    let folders: Vec<Value> = names
        .iter()
        .map(|name| json!({ "path": relative_worktree_path(name) }))
        .collect();

    let mut workspace = Map::new();
    workspace.insert("folders".to_string(), Value::Array(folders));

    if let Some(template) = template {
        for (key, value) in template {
            workspace.insert(key.clone(), value.clone());
        }
    }

    workspace
}

/// True when an existing workspace file still points at `../<name>` folders
pub fn has_legacy_folders(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(existing) = serde_json::from_str::<Value>(&contents) else {
        return false;
    };

    existing
        .get("folders")
        .and_then(Value::as_array)
        .is_some_and(|folders| {
            folders.iter().any(|f| {
                f.get("path")
                    .and_then(Value::as_str)
                    .is_some_and(|p| p.starts_with("../"))
            })
        })
}

/// Write the workspace file (2-space indentation) and return its path
pub fn write_workspace(repo_root: &Path, workspace: &Map<String, Value>) -> Result<PathBuf> {
    let path = workspace_path(repo_root);
    let contents =
        serde_json::to_string_pretty(workspace).context("Failed to serialize workspace")?;
    fs::write(&path, contents)
        .with_context(|| format!("Failed to write workspace file: {}", path.display()))?;
    Ok(path)
}

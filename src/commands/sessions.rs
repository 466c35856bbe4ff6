//! Session lifecycle commands
//! Usage: branchyard [save-session <name>|restore [name]|sessions|delete-session <name>]

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::collections::BTreeMap;
use std::fmt::Write as _;

use super::common::Environment;
use crate::config::FALLBACK_EDITOR;
use crate::error::BranchyardError;
use crate::git::worktree::worktrees_dir;
use crate::git::Vcs;
use crate::orchestrator::{run_create, CreateOptions, ExecutionMode};
use crate::output;
use crate::preflight::PreflightOptions;
use crate::sessions::Session;
use crate::validation::validate_name;

/// Snapshot the worktrees currently under `.worktrees/` as `name`
pub fn save(env: &Environment, name: Option<String>, base_branch: &str) -> Result<()> {
    let name = name.ok_or(BranchyardError::MissingArgument("Session name"))?;
    validate_name(&name).with_context(|| format!("Invalid session name '{name}'"))?;

    let root = env.repo_root(PreflightOptions::default())?;
    let managed = worktrees_dir(&root);
    let worktrees: Vec<String> = env
        .vcs
        .list_worktrees()
        .into_iter()
        .filter(|wt| wt.path.starts_with(&managed))
        .filter_map(|wt| wt.branch)
        .collect();

    if worktrees.is_empty() {
        output::warn("No worktrees under .worktrees/ to save.");
        return Ok(());
    }

    let editor = env
        .config
        .load()?
        .default_editor
        .unwrap_or_else(|| FALLBACK_EDITOR.to_string());

    let existed = env.sessions.get(&name)?.is_some();
    let count = worktrees.len();
    env.sessions
        .save(&name, Session::new(worktrees, base_branch, editor))?;

    let verb = if existed { "updated" } else { "saved" };
    output::success(format!("Session '{name}' {verb} with {count} worktree(s)."));
    Ok(())
}

/// Recreate a saved session, or the last one when no name is given
pub fn restore(
    env: &Environment,
    name: Option<String>,
    mode: ExecutionMode,
    dry_run: bool,
    allow_subdir: bool,
) -> Result<()> {
    let (name, session) = match name {
        Some(name) => {
            let session = env
                .sessions
                .get(&name)?
                .ok_or_else(|| BranchyardError::SessionNotFound(name.clone()))?;
            (name, session)
        }
        None => match env.sessions.get_last()? {
            Some(last) => last,
            None => bail!("No last session found. Save one with 'branchyard save-session <name>'."),
        },
    };

    let root = env.repo_root(PreflightOptions {
        show_info: true,
        allow_subdir,
    })?;

    output::info(format!(
        "Restoring session '{name}': {} (base: {}, editor: {})",
        session.worktrees.join(", "),
        session.base_branch,
        session.editor
    ));
    println!();

    let options = CreateOptions {
        names: session.worktrees,
        base_branch: session.base_branch,
        mode,
        dry_run,
        open: true,
        editor: Some(session.editor),
        offer_session_save: false,
        ..Default::default()
    };
    run_create(env.context(), &root, &options)?;
    Ok(())
}

pub fn list(env: &Environment) -> Result<()> {
    let file = env.sessions.load()?;
    print!(
        "{}",
        render(&file.sessions, file.last_session.as_deref())
    );
    Ok(())
}

pub fn delete(env: &Environment, name: Option<String>) -> Result<()> {
    let name = name.ok_or(BranchyardError::MissingArgument("Session name"))?;
    if env.sessions.delete(&name)? {
        output::success(format!("Session '{name}' deleted."));
    } else {
        output::warn(format!("Session '{name}' not found."));
    }
    Ok(())
}

fn render(sessions: &BTreeMap<String, Session>, last: Option<&str>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "Saved sessions:".bold());
    let _ = writeln!(out, "{}", output::rule().dimmed());

    if sessions.is_empty() {
        let _ = writeln!(out, "(no saved sessions)");
        return out;
    }

    for (name, session) in sessions {
        let marker = if last == Some(name.as_str()) {
            format!(" {}", "(last)".cyan())
        } else {
            String::new()
        };
        let _ = writeln!(out, "{} {}{marker}", "●".green(), name.bold());
        let _ = writeln!(
            out,
            "   Worktrees: {} ({})",
            session.worktrees.len(),
            session.worktrees.join(", ")
        );
        let _ = writeln!(out, "   Base:      {}", session.base_branch);
        let _ = writeln!(out, "   Editor:    {}", session.editor);
        if let Some(saved_at) = session.saved_at {
            let _ = writeln!(out, "   Saved:     {}", saved_at.format("%Y-%m-%d %H:%M UTC"));
        }
    }
    out
}

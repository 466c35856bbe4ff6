//! Create flow
//!
//! Per name: skip branches already checked out elsewhere, ask before reusing
//! an existing branch, never overwrite an existing directory, then
//! `git worktree add`. Afterwards the workspace file is written, the editor
//! optionally opened, and the run optionally saved as a session.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::executor::{run_each, ExecutionMode};
use super::launch::open_workspace;
use super::workspace::{
    compose_workspace, has_legacy_folders, workspace_path, write_workspace, WORKSPACE_FILE,
};
use super::FlowContext;
use crate::config::FALLBACK_EDITOR;
use crate::error::BranchyardError;
use crate::git::worktree::{
    legacy_worktree_path, relative_worktree_path, same_path, worktree_path, worktrees_dir,
};
use crate::output;
use crate::sessions::Session;
use crate::validation::validate_name;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOptions {
    pub names: Vec<String>,
    pub base_branch: String,
    pub mode: ExecutionMode,
    /// When false, no worktree is created; only the workspace/editor/session steps run
    pub create: bool,
    pub dry_run: bool,
    /// Open the editor without asking
    pub open: bool,
    /// Editor to use instead of the configured default
    pub editor: Option<String>,
    /// Ask whether to save the run as a named session
    pub offer_session_save: bool,
}

impl Default for CreateOptions {
    fn default() -> Self {
        Self {
            names: Vec::new(),
            base_branch: "main".to_string(),
            mode: ExecutionMode::default(),
            create: true,
            dry_run: false,
            open: false,
            editor: None,
            offer_session_save: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The branch is checked out in another worktree
    CheckedOut,
    /// The user declined to reuse an existing branch
    Declined,
    /// `.worktrees/<name>` already exists on disk
    DirectoryExists,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    Created { reused_branch: bool },
    Skipped(SkipReason),
    DryRun,
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub struct CreateReport {
    pub outcomes: Vec<(String, CreateOutcome)>,
    pub workspace: Option<PathBuf>,
    pub editor: Option<String>,
    pub opened: bool,
    pub saved_session: Option<String>,
    /// The user stopped the flow at the legacy-layout prompt
    pub aborted: bool,
}

impl CreateReport {
    pub fn outcome(&self, name: &str) -> Option<&CreateOutcome> {
        self.outcomes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, outcome)| outcome)
    }

    pub fn created(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, CreateOutcome::Created { .. }))
            .map(|(n, _)| n.as_str())
            .collect()
    }
}

/// Run the create flow against `repo_root`
pub fn run_create(
    ctx: FlowContext<'_>,
    repo_root: &Path,
    options: &CreateOptions,
) -> Result<CreateReport> {
    if options.names.is_empty() {
        return Err(BranchyardError::MissingArgument("Worktree names").into());
    }
    for name in &options.names {
        validate_name(name).with_context(|| format!("Invalid worktree name '{name}'"))?;
    }

    let mut config = ctx.config.load()?;
    let mut report = CreateReport::default();

    if !confirm_legacy_layout(ctx, repo_root, &options.names)? {
        println!("Aborted.");
        report.aborted = true;
        return Ok(report);
    }

    if options.create {
        if !options.dry_run {
            let dir = worktrees_dir(repo_root);
            fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }

        let checked_out = ctx.vcs.checked_out_branches();
        let branches = ctx.vcs.list_branches();

        if options.mode == ExecutionMode::Parallel && options.names.len() > 1 {
            output::info(format!(
                "Creating {} worktrees in parallel...",
                options.names.len()
            ));
        }

        let outcomes = run_each(&options.names, options.mode, |name| {
            create_one(ctx, repo_root, name, options, &checked_out, &branches).unwrap_or_else(|e| {
                output::failure(format!("{name}: {e:#}"));
                CreateOutcome::Failed(format!("{e:#}"))
            })
        });
        report.outcomes = options.names.iter().cloned().zip(outcomes).collect();
    }

    if options.names.len() > 1 && !options.dry_run {
        crate::print_tree_banner();
    }

    if options.dry_run {
        output::dry_run(format!(
            "Would write {WORKSPACE_FILE} with {} folder(s)",
            options.names.len()
        ));
        output::success("Dry run complete!");
        return Ok(report);
    }

    let registry = config.editor_registry();
    let editor = match options.editor.clone().or_else(|| config.default_editor.clone()) {
        Some(editor) => editor,
        None => {
            let ids = registry.ids();
            let choice = ctx.prompter.select("Select editor", &ids)?;
            let editor = ids
                .get(choice)
                .cloned()
                .unwrap_or_else(|| FALLBACK_EDITOR.to_string());
            if ctx.prompter.confirm("Set this as default editor?", false)? {
                config.default_editor = Some(editor.clone());
                ctx.config.save(&config)?;
            }
            editor
        }
    };
    report.editor = Some(editor.clone());

    let folders: Vec<String> = options
        .names
        .iter()
        .filter(|name| worktree_path(repo_root, name).is_dir())
        .cloned()
        .collect();

    if has_legacy_folders(&workspace_path(repo_root)) {
        output::info(
            "Updating workspace file with new paths (was using ../<name>, now .worktrees/<name>)",
        );
    }
    let workspace = compose_workspace(&folders, config.workspace_template.as_ref());
    let ws_path = write_workspace(repo_root, &workspace)?;
    output::success(format!("Created workspace file: {WORKSPACE_FILE}"));
    report.workspace = Some(ws_path.clone());

    let should_open = options.open || ctx.prompter.confirm("Open workspace in editor now?", true)?;
    let launch_hint = format!(
        "{} {WORKSPACE_FILE}",
        registry.command_for(&editor).unwrap_or("code")
    );
    if should_open {
        output::info(format!("Opening workspace in {editor}..."));
        open_workspace(ctx.launcher, &registry, &editor, &ws_path)?;
        report.opened = true;
    }

    if options.offer_session_save
        && ctx
            .prompter
            .confirm("Do you want to save this setup as a named session?", false)?
    {
        let session = Session::new(options.names.clone(), &options.base_branch, &editor);
        report.saved_session = save_session_interactive(ctx, session)?;
    }

    println!();
    output::success("Setup complete!");
    println!("   Worktrees: {}/", crate::git::worktree::WORKTREES_DIR);
    println!("   Workspace file: {WORKSPACE_FILE}");
    if !report.opened {
        println!();
        println!("To start working, open the workspace:");
        println!("   {launch_hint}");
    }

    Ok(report)
}

fn create_one(
    ctx: FlowContext<'_>,
    repo_root: &Path,
    name: &str,
    options: &CreateOptions,
    checked_out: &[String],
    branches: &[String],
) -> Result<CreateOutcome> {
    if checked_out.iter().any(|b| b == name) {
        output::skip(format!(
            "Branch '{name}' is already checked out in another worktree. Skipping."
        ));
        return Ok(CreateOutcome::Skipped(SkipReason::CheckedOut));
    }

    let reuse = branches.iter().any(|b| b == name);
    if reuse
        && !ctx.prompter.confirm(
            &format!("Branch '{name}' already exists. Reuse it in a new worktree?"),
            false,
        )?
    {
        output::skip(format!("Skipping '{name}'"));
        return Ok(CreateOutcome::Skipped(SkipReason::Declined));
    }

    let dir = worktree_path(repo_root, name);
    if dir.exists() {
        output::warn(format!(
            "Folder '{}' already exists. Skipping creation.",
            relative_worktree_path(name)
        ));
        return Ok(CreateOutcome::Skipped(SkipReason::DirectoryExists));
    }

    let source = if reuse {
        format!("existing branch '{name}'")
    } else {
        options.base_branch.clone()
    };

    if options.dry_run {
        output::dry_run(format!("Would create worktree: {name} from {source}"));
        return Ok(CreateOutcome::DryRun);
    }

    output::info(format!("Creating worktree: {name} from {source}"));
    let base = (!reuse).then_some(options.base_branch.as_str());
    ctx.vcs.add_worktree(&dir, name, base)?;
    output::success(format!("Created {}", relative_worktree_path(name)));

    Ok(CreateOutcome::Created {
        reused_branch: reuse,
    })
}

/// Warn about names that still exist in the legacy `../<name>` layout.
/// Returns false if the user chose to stop.
fn confirm_legacy_layout(ctx: FlowContext<'_>, repo_root: &Path, names: &[String]) -> Result<bool> {
    let legacy: Vec<PathBuf> = names
        .iter()
        .filter_map(|name| legacy_worktree_path(repo_root, name))
        .filter(|path| path.exists() && !same_path(path, repo_root))
        .collect();

    if legacy.is_empty() {
        return Ok(true);
    }

    output::warn("Found worktrees in old location (parent directory):");
    for path in &legacy {
        eprintln!("   {}", path.display());
    }
    eprintln!("   These should be removed with 'git worktree remove'.");
    eprintln!(
        "   The new location will be: {}/",
        crate::git::worktree::WORKTREES_DIR
    );

    ctx.prompter
        .confirm("Continue with creating worktrees in new location?", false)
}

/// Ask for a session name and save, confirming before overwriting.
/// Returns the saved name.
pub(crate) fn save_session_interactive(
    ctx: FlowContext<'_>,
    session: Session,
) -> Result<Option<String>> {
    let name = ctx.prompter.input("Enter session name", None)?;
    if name.is_empty() {
        output::warn("No session name given. Session not saved.");
        return Ok(None);
    }
    if let Err(e) = validate_name(&name) {
        output::failure(format!("{e}. Session not saved."));
        return Ok(None);
    }

    let exists = ctx.sessions.get(&name)?.is_some();
    if exists
        && !ctx.prompter.confirm(
            &format!("Session '{name}' already exists. Overwrite?"),
            false,
        )?
    {
        println!("Session not saved.");
        return Ok(None);
    }

    ctx.sessions.save(&name, session)?;
    let verb = if exists { "updated" } else { "saved" };
    output::success(format!("Session '{name}' {verb}."));
    Ok(Some(name))
}

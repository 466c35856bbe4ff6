//! Removing worktrees

use super::helpers::{commit_file, create_temp_git_repo, RecordingLauncher, TestRepo};
use branchyard::commands::common::Environment;
use branchyard::git::worktree::worktree_path;
use branchyard::git::Vcs;
use branchyard::orchestrator::{
    run_create, run_remove, CreateOptions, ExecutionMode, RemoveOptions, RemoveOutcome,
};

fn setup(names: &[&str], extra_answers: &[&str]) -> (TestRepo, Environment) {
    let repo = create_temp_git_repo().unwrap().with_default_editor("vscode");
    let mut answers = vec!["n", "n"];
    answers.extend_from_slice(extra_answers);
    let env = repo.env(answers, RecordingLauncher::default());
    run_create(
        env.context(),
        &repo.root,
        &CreateOptions {
            names: names.iter().map(|s| (*s).to_string()).collect(),
            mode: ExecutionMode::Sequential,
            ..Default::default()
        },
    )
    .unwrap();
    (repo, env)
}

#[test]
fn test_remove_with_branch_deletion() {
    let (repo, env) = setup(&["a", "b"], &[]);

    let report = run_remove(
        env.context(),
        &repo.root,
        &RemoveOptions {
            names: vec!["a".to_string()],
            delete_branch: true,
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(
        report.outcome("a"),
        Some(&RemoveOutcome::Removed {
            branch_deleted: Some(true)
        })
    );
    assert!(!worktree_path(&repo.root, "a").exists());
    assert!(worktree_path(&repo.root, "b").exists());
    assert_eq!(repo.branches().unwrap(), vec!["b", "main"]);
}

#[test]
fn test_unmerged_branch_delete_failure_is_a_warning() {
    let (repo, env) = setup(&["work"], &[]);
    commit_file(&worktree_path(&repo.root, "work"), "notes.txt", "wip\n").unwrap();

    let report = run_remove(
        env.context(),
        &repo.root,
        &RemoveOptions {
            names: vec!["work".to_string()],
            delete_branch: true,
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(
        report.outcome("work"),
        Some(&RemoveOutcome::Removed {
            branch_deleted: Some(false)
        })
    );
    assert!(!worktree_path(&repo.root, "work").exists());
    assert!(repo.branches().unwrap().contains(&"work".to_string()));
}

#[test]
fn test_dirty_worktree_needs_force() {
    let (repo, env) = setup(&["dirty"], &["y", "yes"]);
    std::fs::write(worktree_path(&repo.root, "dirty").join("scratch.txt"), "x").unwrap();

    let plain = run_remove(
        env.context(),
        &repo.root,
        &RemoveOptions {
            names: vec!["dirty".to_string()],
            ..Default::default()
        },
    )
    .unwrap();
    assert!(matches!(plain.outcome("dirty"), Some(RemoveOutcome::Failed(_))));
    assert!(worktree_path(&repo.root, "dirty").exists());

    let forced = run_remove(
        env.context(),
        &repo.root,
        &RemoveOptions {
            names: vec!["dirty".to_string()],
            force: true,
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(
        forced.outcome("dirty"),
        Some(&RemoveOutcome::Removed {
            branch_deleted: None
        })
    );
    assert!(env.vcs.list_worktrees().is_empty());
}

#[test]
fn test_missing_and_dry_run() {
    let (repo, env) = setup(&["a"], &[]);

    let report = run_remove(
        env.context(),
        &repo.root,
        &RemoveOptions {
            names: vec!["ghost".to_string(), "a".to_string()],
            dry_run: true,
            delete_branch: true,
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(report.outcome("ghost"), Some(&RemoveOutcome::NotFound));
    assert_eq!(report.outcome("a"), Some(&RemoveOutcome::DryRun));
    assert!(worktree_path(&repo.root, "a").exists());
    assert!(repo.branches().unwrap().contains(&"a".to_string()));
}

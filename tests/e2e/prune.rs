//! Pruning orphaned worktrees

use super::helpers::{create_temp_git_repo, RecordingLauncher};
use branchyard::git::worktree::worktree_path;
use branchyard::git::Vcs;
use branchyard::orchestrator::{run_create, run_prune, CreateOptions, PruneOptions};

#[test]
fn test_prune_auto_removes_only_orphans() {
    let repo = create_temp_git_repo().unwrap().with_default_editor("vscode");
    let env = repo.env(["n", "n"], RecordingLauncher::default());
    run_create(
        env.context(),
        &repo.root,
        &CreateOptions {
            names: vec!["x".to_string(), "y".to_string()],
            ..Default::default()
        },
    )
    .unwrap();

    repo.git(&["update-ref", "-d", "refs/heads/y"]).unwrap();

    let dry = run_prune(
        &env.vcs,
        PruneOptions {
            auto: true,
            dry_run: true,
        },
    )
    .unwrap();
    assert_eq!(dry.orphaned, vec!["y"]);
    assert!(worktree_path(&repo.root, "y").exists());

    let report = run_prune(
        &env.vcs,
        PruneOptions {
            auto: true,
            dry_run: false,
        },
    )
    .unwrap();

    assert_eq!(report.pruned, vec!["y"]);
    assert!(report.failed.is_empty());
    assert!(worktree_path(&repo.root, "x").exists());
    assert!(!worktree_path(&repo.root, "y").exists());
    let remaining: Vec<_> = env
        .vcs
        .list_worktrees()
        .into_iter()
        .filter_map(|wt| wt.branch)
        .collect();
    assert_eq!(remaining, vec!["x"]);
}

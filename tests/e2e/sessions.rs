//! Session and config persistence

use super::helpers::{create_temp_git_repo, RecordingLauncher};
use branchyard::commands::sessions;
use branchyard::config::Config;
use branchyard::error::BranchyardError;
use branchyard::git::worktree::worktree_path;
use branchyard::orchestrator::{
    run_create, run_remove, CreateOptions, ExecutionMode, RemoveOptions, WORKSPACE_FILE,
};

#[test]
fn test_save_and_restore_session() {
    let repo = create_temp_git_repo().unwrap().with_default_editor("zed");
    let launcher = RecordingLauncher::with_installed(&["zed"]);
    // create: open? no, save? no; restore: reuse a? yes, reuse b? yes
    let env = repo.env(["n", "n", "y", "y"], launcher.clone());

    run_create(
        env.context(),
        &repo.root,
        &CreateOptions {
            names: vec!["a".to_string(), "b".to_string()],
            ..Default::default()
        },
    )
    .unwrap();

    sessions::save(&env, Some("sprint".to_string()), "main").unwrap();
    let (name, mut saved) = repo.sessions().get_last().unwrap().unwrap();
    saved.worktrees.sort();
    assert_eq!(name, "sprint");
    assert_eq!(saved.worktrees, vec!["a", "b"]);
    assert_eq!(saved.base_branch, "main");
    assert_eq!(saved.editor, "zed");
    assert!(saved.saved_at.is_some());

    run_remove(
        env.context(),
        &repo.root,
        &RemoveOptions {
            names: vec!["a".to_string(), "b".to_string()],
            ..Default::default()
        },
    )
    .unwrap();
    assert!(!worktree_path(&repo.root, "a").exists());

    sessions::restore(&env, None, ExecutionMode::Sequential, false, false).unwrap();

    assert!(worktree_path(&repo.root, "a").exists());
    assert!(worktree_path(&repo.root, "b").exists());
    assert_eq!(
        launcher.launched(),
        vec![("zed".to_string(), repo.root.join(WORKSPACE_FILE))]
    );
}

#[test]
fn test_restore_unknown_session_is_fatal() {
    let repo = create_temp_git_repo().unwrap();
    let env = repo.env(Vec::<String>::new(), RecordingLauncher::default());

    let err = sessions::restore(
        &env,
        Some("nope".to_string()),
        ExecutionMode::default(),
        false,
        false,
    )
    .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<BranchyardError>(),
        Some(BranchyardError::SessionNotFound(name)) if name == "nope"
    ));
}

#[test]
fn test_save_session_requires_name() {
    let repo = create_temp_git_repo().unwrap();
    let env = repo.env(Vec::<String>::new(), RecordingLauncher::default());

    let err = sessions::save(&env, None, "main").unwrap_err();
    assert_eq!(err.to_string(), "Session name required.");
}

#[test]
fn test_delete_session() {
    let repo = create_temp_git_repo().unwrap();
    let env = repo.env(Vec::<String>::new(), RecordingLauncher::default());
    repo.sessions()
        .save(
            "old",
            branchyard::sessions::Session::new(vec!["a".to_string()], "main", "vscode"),
        )
        .unwrap();

    sessions::delete(&env, Some("old".to_string())).unwrap();
    sessions::delete(&env, Some("old".to_string())).unwrap();

    assert!(repo.sessions().list().unwrap().is_empty());
    assert!(repo.sessions().get_last().unwrap().is_none());
}

#[test]
fn test_corrupt_sessions_file_is_fatal() {
    let repo = create_temp_git_repo().unwrap();
    std::fs::write(&repo.sessions_path, r#"{"sessions": {"bad": {"worktrees": "a"}}}"#).unwrap();
    let env = repo.env(Vec::<String>::new(), RecordingLauncher::default());

    let err = sessions::list(&env).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<BranchyardError>(),
        Some(BranchyardError::InvalidSessions { .. })
    ));
}

#[test]
fn test_config_round_trip() {
    let repo = create_temp_git_repo().unwrap();
    let store = repo.config();

    store
        .save(&Config {
            default_editor: Some("zed".to_string()),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(
        store.load().unwrap(),
        Config {
            default_editor: Some("zed".to_string()),
            ..Default::default()
        }
    );
}

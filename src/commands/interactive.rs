//! Main menu shown when branchyard runs without arguments

use anyhow::Result;
use colored::Colorize;

use super::common::Environment;
use crate::orchestrator::{CreateOptions, PruneOptions, RemoveOptions};
use crate::output;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Create,
    Remove,
    List,
    Prune,
    Restore,
    Configure,
    Exit,
}

impl Action {
    const ALL: [Action; 7] = [
        Action::Create,
        Action::Remove,
        Action::List,
        Action::Prune,
        Action::Restore,
        Action::Configure,
        Action::Exit,
    ];

    fn label(self) -> &'static str {
        match self {
            Action::Create => "Create worktrees",
            Action::Remove => "Remove worktrees",
            Action::List => "List worktrees",
            Action::Prune => "Prune orphaned worktrees",
            Action::Restore => "Restore session",
            Action::Configure => "Configure",
            Action::Exit => "Exit",
        }
    }
}

pub fn execute(env: &Environment) -> Result<()> {
    println!("{}", crate::LOGO.green());
    println!();

    let labels: Vec<String> = Action::ALL.iter().map(|a| a.label().to_string()).collect();
    let choice = env.prompter.select("What would you like to do?", &labels)?;

    match Action::ALL.get(choice).copied().unwrap_or(Action::Exit) {
        Action::Create => {
            let names: Vec<String> = env
                .prompter
                .input("Worktree names (space separated)", None)?
                .split_whitespace()
                .map(str::to_string)
                .collect();
            let base_branch = env.prompter.input("Base branch", Some("main"))?;
            let options = CreateOptions {
                names,
                base_branch,
                ..Default::default()
            };
            super::create::execute(env, options, false)
        }
        Action::Remove => {
            let delete_branch = env
                .prompter
                .confirm("Also delete the branches?", false)?;
            let options = RemoveOptions {
                delete_branch,
                ..Default::default()
            };
            super::remove::execute(env, options, false)
        }
        Action::List => super::list::execute(env),
        Action::Prune => super::prune::execute(
            env,
            PruneOptions {
                auto: true,
                dry_run: false,
            },
        ),
        Action::Restore => {
            let names: Vec<String> = env.sessions.list()?.into_keys().collect();
            if names.is_empty() {
                output::warn("No saved sessions.");
                return Ok(());
            }
            let choice = env.prompter.select("Select session", &names)?;
            let name = names.get(choice).cloned();
            super::sessions::restore(env, name, Default::default(), false, false)
        }
        Action::Configure => super::config::execute(env),
        Action::Exit => Ok(()),
    }
}

use anyhow::Result;
use branchyard::commands::common::Environment;
use branchyard::commands::{config, create, fun, interactive, list, prune, remove, sessions};
use branchyard::completions::{generate_completions, Shell};
use branchyard::error::BranchyardError;
use branchyard::orchestrator::{CreateOptions, ExecutionMode, PruneOptions, RemoveOptions};
use std::str::FromStr;

use super::types::{Cli, Commands, WorktreeArgs};

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Some(command) => dispatch_command(command),
        None => dispatch_worktrees(cli.worktrees),
    }
}

fn dispatch_command(command: Commands) -> Result<()> {
    match command {
        Commands::List { cwd } => list::execute(&Environment::from_cwd(cwd)?),
        Commands::Prune { auto, dry_run, cwd } => prune::execute(
            &Environment::from_cwd(cwd)?,
            PruneOptions { auto, dry_run },
        ),
        Commands::SaveSession { name, base, cwd } => {
            sessions::save(&Environment::from_cwd(cwd)?, name, &base)
        }
        Commands::Restore {
            name,
            dry_run,
            sequential,
            allow_subdir,
            cwd,
        } => sessions::restore(
            &Environment::from_cwd(cwd)?,
            name,
            ExecutionMode::from_sequential_flag(sequential),
            dry_run,
            allow_subdir,
        ),
        Commands::Sessions => sessions::list(&Environment::from_cwd(None)?),
        Commands::DeleteSession { name } => sessions::delete(&Environment::from_cwd(None)?, name),
        Commands::Config => config::execute(&Environment::from_cwd(None)?),
        Commands::Completions { shell } => {
            let shell = Shell::from_str(&shell)?;
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate_completions(&mut cmd, shell);
            Ok(())
        }
    }
}

/// No subcommand: create, remove, the easter egg, or the interactive menu
fn dispatch_worktrees(args: WorktreeArgs) -> Result<()> {
    if args.fun {
        return fun::execute();
    }
    if !args.remove && args.names.is_empty() && !args.is_empty() {
        return Err(BranchyardError::MissingArgument("Worktree names").into());
    }

    let env = Environment::from_cwd(args.cwd)?;
    let mode = ExecutionMode::from_sequential_flag(args.sequential);

    if args.remove {
        let options = RemoveOptions {
            names: args.names,
            force: args.force,
            dry_run: args.dry_run,
            mode,
            delete_branch: args.delete_branch,
        };
        return remove::execute(&env, options, args.allow_subdir);
    }

    if args.names.is_empty() {
        return interactive::execute(&env);
    }

    if args.force {
        tracing::debug!("--force has no effect on create; existing folders are never overwritten");
    }

    let options = CreateOptions {
        names: args.names,
        base_branch: args.base.unwrap_or_else(|| "main".to_string()),
        mode,
        create: !args.no_create,
        dry_run: args.dry_run,
        open: args.open,
        editor: None,
        offer_session_save: true,
    };
    create::execute(&env, options, args.allow_subdir)
}

use branchyard::validation::clap_name_validator;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "
   ┌┐ ┬─┐┌─┐┌┐┌┌─┐┬ ┬┬ ┬┌─┐┬─┐┌┬┐
   ├┴┐├┬┘├─┤││││  ├─┤└┬┘├─┤├┬┘ ││
   └─┘┴└─┴ ┴┘└┘└─┘┴ ┴ ┴ ┴ ┴┴└──┴┘

{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}";

const AFTER_HELP: &str = "\
Examples:
  branchyard feature-a feature-b           Create two worktrees from main
  branchyard feature-a --base develop      Create from develop
  branchyard --remove feature-a --delete-branch
  branchyard save-session sprint-42
  branchyard restore sprint-42";

#[derive(Parser)]
#[command(name = "branchyard")]
#[command(about = "Parallel git worktrees under .worktrees/, with an editor workspace and saved sessions", long_about = None)]
#[command(version)]
#[command(help_template = HELP_TEMPLATE)]
#[command(after_help = AFTER_HELP)]
#[command(subcommand_help_heading = "Commands")]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub worktrees: WorktreeArgs,
}

/// Options for the default create/remove mode
#[derive(Args, Debug, Default)]
pub struct WorktreeArgs {
    /// Worktree (branch) names
    #[arg(value_parser = clap_name_validator)]
    pub names: Vec<String>,

    /// Base branch for new worktrees [default: main]
    #[arg(long, value_name = "BRANCH")]
    pub base: Option<String>,

    /// Skip worktree creation; only write the workspace file
    #[arg(long)]
    pub no_create: bool,

    /// Open the workspace in the editor without asking
    #[arg(long)]
    pub open: bool,

    /// Repository directory (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Print what would happen without changing anything
    #[arg(long)]
    pub dry_run: bool,

    /// With --remove: discard uncommitted changes (asks twice)
    #[arg(long)]
    pub force: bool,

    /// Do not warn when running from a subdirectory of the repository
    #[arg(long)]
    pub allow_subdir: bool,

    /// Process worktrees one at a time instead of in parallel
    #[arg(long)]
    pub sequential: bool,

    /// Remove the named worktrees instead of creating them
    #[arg(long)]
    pub remove: bool,

    /// With --remove: also delete the branches
    #[arg(long)]
    pub delete_branch: bool,

    /// 🌳
    #[arg(long)]
    pub fun: bool,
}

impl WorktreeArgs {
    /// True when branchyard was run with no names and no flags
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
            && self.base.is_none()
            && self.cwd.is_none()
            && ![
                self.no_create,
                self.open,
                self.dry_run,
                self.force,
                self.allow_subdir,
                self.sequential,
                self.remove,
                self.delete_branch,
                self.fun,
            ]
            .contains(&true)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List active worktrees
    List {
        /// Repository directory (defaults to the current directory)
        #[arg(long, value_name = "DIR")]
        cwd: Option<PathBuf>,
    },

    /// Remove worktrees whose branch no longer exists
    Prune {
        /// Remove orphaned worktrees automatically
        #[arg(long)]
        auto: bool,

        /// Only report what would be removed
        #[arg(long)]
        dry_run: bool,

        /// Repository directory (defaults to the current directory)
        #[arg(long, value_name = "DIR")]
        cwd: Option<PathBuf>,
    },

    /// Save the current worktrees as a named session
    SaveSession {
        /// Session name
        #[arg(value_parser = clap_name_validator)]
        name: Option<String>,

        /// Base branch recorded with the session
        #[arg(long, default_value = "main")]
        base: String,

        /// Repository directory (defaults to the current directory)
        #[arg(long, value_name = "DIR")]
        cwd: Option<PathBuf>,
    },

    /// Recreate a saved session (the last one if no name is given)
    Restore {
        /// Session name
        name: Option<String>,

        /// Print what would happen without changing anything
        #[arg(long)]
        dry_run: bool,

        /// Process worktrees one at a time instead of in parallel
        #[arg(long)]
        sequential: bool,

        /// Do not warn when running from a subdirectory of the repository
        #[arg(long)]
        allow_subdir: bool,

        /// Repository directory (defaults to the current directory)
        #[arg(long, value_name = "DIR")]
        cwd: Option<PathBuf>,
    },

    /// List saved sessions
    Sessions,

    /// Delete a saved session
    DeleteSession {
        /// Session name
        name: Option<String>,
    },

    /// Interactive settings menu
    Config,

    /// Generate shell completion script
    ///
    /// Install:
    ///   bash: branchyard completions bash > ~/.local/share/bash-completion/completions/branchyard
    ///   zsh:  branchyard completions zsh > ~/.zfunc/_branchyard
    ///   fish: branchyard completions fish > ~/.config/fish/completions/branchyard.fish
    Completions {
        /// Shell type: bash, zsh, or fish
        shell: String,
    },
}

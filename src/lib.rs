pub mod commands;
pub mod completions;
pub mod config;
pub mod error;
pub mod git;
pub mod orchestrator;
pub mod output;
pub mod preflight;
pub mod prompt;
pub mod sessions;
pub mod validation;

/// ASCII art logo for the branchyard CLI
pub const LOGO: &str = "\
   ┌┐ ┬─┐┌─┐┌┐┌┌─┐┬ ┬┬ ┬┌─┐┬─┐┌┬┐
   ├┴┐├┬┘├─┤││││  ├─┤└┬┘├─┤├┬┘ ││
   └─┘┴└─┴ ┴┘└┘└─┘┴ ┴ ┴ ┴ ┴┴└──┴┘";

/// Shown by `--fun` and after creating more than one worktree
pub const TREE_BANNER: &str = r"
        🌳      🌳      🌳
       /|\    /|\    /|\
        |      |      |
   ~~~~~~~~~~~~~~~~~~~~~~~~~~~~";

pub const TREE_SLOGAN: &str = "YOU GET A TREE! YOU GET A TREE! EVERYBODY GETS A TREE!";

pub fn print_tree_banner() {
    use colored::Colorize;

    println!("{}", TREE_BANNER.green());
    println!();
    println!("   {}", TREE_SLOGAN.green().bold());
    println!();
}

//! User prompts
//!
//! The flows never read stdin directly; they go through `Prompter`.
//! `TerminalPrompter` renders with dialoguer, `ScriptedPrompter` answers
//! from a fixed list for tests.

mod scripted;
mod terminal;

use anyhow::Result;

pub use scripted::ScriptedPrompter;
pub use terminal::TerminalPrompter;

pub trait Prompter: Send + Sync {
    /// Yes/no question
    fn confirm(&self, question: &str, default: bool) -> Result<bool>;

    /// Free text; may be empty unless `default` fills it
    fn input(&self, question: &str, default: Option<&str>) -> Result<String>;

    /// Pick one option, returning its index
    fn select(&self, question: &str, options: &[String]) -> Result<usize>;

    /// Pick any number of options, returning their indices in option order
    fn multi_select(&self, question: &str, options: &[String]) -> Result<Vec<usize>>;
}

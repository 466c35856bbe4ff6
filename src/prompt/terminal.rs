use anyhow::{Context, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, MultiSelect, Select};
use std::sync::Mutex;

use super::Prompter;

/// Interactive prompts on the controlling terminal.
///
/// Prompts from concurrently running worktree operations are serialized by
/// an internal lock so only one question is on screen at a time.
#[derive(Default)]
pub struct TerminalPrompter {
    theme: ColorfulTheme,
    lock: Mutex<()>,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    fn exclusive<T>(&self, f: impl FnOnce(&ColorfulTheme) -> Result<T>) -> Result<T> {
        let _guard = self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&self.theme)
    }
}

impl Prompter for TerminalPrompter {
    fn confirm(&self, question: &str, default: bool) -> Result<bool> {
        self.exclusive(|theme| {
            Confirm::with_theme(theme)
                .with_prompt(question)
                .default(default)
                .interact()
                .context("Failed to read confirmation")
        })
    }

    fn input(&self, question: &str, default: Option<&str>) -> Result<String> {
        self.exclusive(|theme| {
            let mut input = Input::<String>::with_theme(theme)
                .with_prompt(question)
                .allow_empty(true);
            if let Some(default) = default {
                input = input.default(default.to_string());
            }
            let answer = input.interact_text().context("Failed to read input")?;
            Ok(answer.trim().to_string())
        })
    }

    fn select(&self, question: &str, options: &[String]) -> Result<usize> {
        self.exclusive(|theme| {
            Select::with_theme(theme)
                .with_prompt(question)
                .items(options)
                .default(0)
                .interact()
                .context("Failed to read selection")
        })
    }

    fn multi_select(&self, question: &str, options: &[String]) -> Result<Vec<usize>> {
        self.exclusive(|theme| {
            MultiSelect::with_theme(theme)
                .with_prompt(format!("{question} (Space to toggle, Enter to confirm)"))
                .items(options)
                .interact()
                .context("Failed to read selection")
        })
    }
}

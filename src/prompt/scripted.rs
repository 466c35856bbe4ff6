use anyhow::{anyhow, bail, Result};
use std::collections::VecDeque;
use std::sync::Mutex;

use super::Prompter;

/// Test prompter that answers from a queue of text answers, in the order asked.
///
/// - confirm: `y`/`yes`/`n`/`no`, empty means the default
/// - input: the answer itself, empty falls back to the default
/// - select: a 1-based number or the exact option text
/// - multi_select: space separated 1-based numbers, or `all`
///
/// Every question is recorded and can be inspected with `asked`.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<String>>,
    asked: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: Mutex::new(answers.into_iter().map(Into::into).collect()),
            asked: Mutex::new(Vec::new()),
        }
    }

    /// Questions asked so far
    pub fn asked(&self) -> Vec<String> {
        self.asked
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Answers not consumed yet
    pub fn remaining(&self) -> usize {
        self.answers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    fn next(&self, question: &str) -> Result<String> {
        self.asked
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(question.to_string());
        self.answers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .pop_front()
            .map(|a| a.trim().to_string())
            .ok_or_else(|| anyhow!("No answer available for prompt: {question}"))
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, question: &str, default: bool) -> Result<bool> {
        let answer = self.next(question)?.to_lowercase();
        match answer.as_str() {
            "" => Ok(default),
            "y" | "yes" => Ok(true),
            _ => Ok(false),
        }
    }

    fn input(&self, question: &str, default: Option<&str>) -> Result<String> {
        let answer = self.next(question)?;
        match default {
            Some(default) if answer.is_empty() => Ok(default.to_string()),
            _ => Ok(answer),
        }
    }

    fn select(&self, question: &str, options: &[String]) -> Result<usize> {
        let answer = self.next(question)?;
        if let Some(index) = options.iter().position(|o| *o == answer) {
            return Ok(index);
        }
        match answer.parse::<usize>() {
            Ok(n) if (1..=options.len()).contains(&n) => Ok(n - 1),
            _ => bail!("Invalid choice '{answer}' for prompt: {question}"),
        }
    }

    fn multi_select(&self, question: &str, options: &[String]) -> Result<Vec<usize>> {
        let answer = self.next(question)?;
        if answer.eq_ignore_ascii_case("all") {
            return Ok((0..options.len()).collect());
        }

        let mut picked: Vec<usize> = answer
            .split_whitespace()
            .filter_map(|s| s.parse::<usize>().ok())
            .filter(|n| (1..=options.len()).contains(n))
            .map(|n| n - 1)
            .collect();
        picked.sort_unstable();
        picked.dedup();
        Ok(picked)
    }
}

//! Per-name execution, either all at once or strictly in order

use std::fmt;
use std::str::FromStr;

/// How independent per-name operations are scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// Every name runs on its own thread; outcomes are reported as they finish
    #[default]
    Parallel,
    /// Names run one after another in the order supplied
    Sequential,
}

impl ExecutionMode {
    pub fn from_sequential_flag(sequential: bool) -> Self {
        if sequential {
            ExecutionMode::Sequential
        } else {
            ExecutionMode::Parallel
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionMode::Parallel => write!(f, "parallel"),
            ExecutionMode::Sequential => write!(f, "sequential"),
        }
    }
}

impl FromStr for ExecutionMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "parallel" => Ok(ExecutionMode::Parallel),
            "sequential" => Ok(ExecutionMode::Sequential),
            _ => anyhow::bail!("Unknown execution mode: {s}. Expected 'parallel' or 'sequential'"),
        }
    }
}

/// Run `op` once per name and collect the results in input order.
///
/// In parallel mode every call runs on a scoped thread and all of them are
/// awaited before returning. There is no timeout: a hung call blocks here.
pub fn run_each<T, F>(names: &[String], mode: ExecutionMode, op: F) -> Vec<T>
where
    F: Fn(&str) -> T + Sync,
    T: Send,
{
    match mode {
        ExecutionMode::Sequential => names.iter().map(|name| op(name)).collect(),
        ExecutionMode::Parallel => std::thread::scope(|scope| {
            let op = &op;
            let handles: Vec<_> = names
                .iter()
                .map(|name| scope.spawn(move || op(name)))
                .collect();
            handles
                .into_iter()
                .map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
                })
                .collect()
        }),
    }
}

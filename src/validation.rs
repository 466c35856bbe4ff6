//! Input validation for worktree and session names.
//!
//! A worktree name doubles as a branch name and as a directory under
//! `.worktrees/`, so it has to be safe for both before any git call is made.

use anyhow::{bail, Result};

/// Maximum allowed length for names.
pub const MAX_NAME_LENGTH: usize = 128;

/// Characters git rejects in ref names
const FORBIDDEN_CHARS: &[char] = &['~', '^', ':', '?', '*', '[', '\\'];

/// Validates a worktree (branch) name.
///
/// A name is valid if:
/// - It is not empty and at most MAX_NAME_LENGTH characters
/// - It does not start with `-` (would be read as a flag) or `/`
/// - It contains no whitespace, control characters or git-forbidden characters
/// - None of its `/`-separated components is empty, `.` or `..`, or ends in `.lock`
///
/// # Examples
///
/// ```
/// use branchyard::validation::validate_name;
///
/// assert!(validate_name("feature-x").is_ok());
/// assert!(validate_name("team/bugfix-42").is_ok());
/// assert!(validate_name("").is_err());
/// assert!(validate_name("../etc").is_err());
/// ```
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        bail!("Name cannot be empty");
    }

    if name.len() > MAX_NAME_LENGTH {
        bail!(
            "Name too long: {} characters (max {})",
            name.len(),
            MAX_NAME_LENGTH
        );
    }

    if name.starts_with('-') {
        bail!("Name '{name}' cannot start with '-'");
    }

    if name
        .chars()
        .any(|c| c.is_whitespace() || c.is_control() || FORBIDDEN_CHARS.contains(&c))
    {
        bail!("Name '{name}' contains invalid characters");
    }

    for component in name.split('/') {
        if component.is_empty() || component == "." || component == ".." {
            bail!("Name '{name}' is not a valid path");
        }
        if component.ends_with(".lock") || component.starts_with('.') {
            bail!("Name '{name}' has an invalid component '{component}'");
        }
    }

    Ok(())
}

/// Clap value parser for name arguments.
pub fn clap_name_validator(s: &str) -> Result<String, String> {
    validate_name(s).map_err(|e| e.to_string())?;
    Ok(s.to_string())
}

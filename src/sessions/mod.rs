//! Named session persistence
//!
//! `~/.branchyard-sessions.json` maps a session name to the worktrees, base
//! branch and editor of a multi-branch setup, plus a pointer to the session
//! saved most recently. Every entry is validated on load and one bad entry
//! blocks the whole store.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::BranchyardError;

/// File name under the home directory
pub const SESSIONS_FILE_NAME: &str = ".branchyard-sessions.json";

/// Environment variable overriding the sessions path
pub const SESSIONS_PATH_ENV: &str = "BRANCHYARD_SESSIONS";

/// A saved multi-branch setup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub worktrees: Vec<String>,
    pub base_branch: String,
    pub editor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new(worktrees: Vec<String>, base_branch: impl Into<String>, editor: impl Into<String>) -> Self {
        Self {
            worktrees,
            base_branch: base_branch.into(),
            editor: editor.into(),
            saved_at: None,
        }
    }
}

/// On-disk document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionFile {
    #[serde(default)]
    pub sessions: BTreeMap<String, Session>,
    #[serde(default)]
    pub last_session: Option<String>,
}

/// Loose shape used to name the offending entry when validation fails
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSessionFile {
    #[serde(default)]
    sessions: BTreeMap<String, Value>,
    #[serde(default)]
    last_session: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$BRANCHYARD_SESSIONS` or `~/.branchyard-sessions.json`
    pub fn open_default() -> Result<Self> {
        if let Some(path) = std::env::var_os(SESSIONS_PATH_ENV) {
            return Ok(Self::at(path));
        }
        let home = dirs::home_dir().ok_or(BranchyardError::NoHomeDirectory)?;
        Ok(Self::at(home.join(SESSIONS_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the whole store, or an empty one if the file does not exist
    pub fn load(&self) -> Result<SessionFile> {
        if !self.path.exists() {
            return Ok(SessionFile::default());
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read sessions file: {}", self.path.display()))?;

        let raw: RawSessionFile =
            serde_json::from_str(&contents).map_err(|e| self.invalid(e.to_string()))?;

        let mut sessions = BTreeMap::new();
        for (name, value) in raw.sessions {
            let session: Session = serde_json::from_value(value)
                .map_err(|e| self.invalid(format!("session '{name}': {e}")))?;
            sessions.insert(name, session);
        }

        Ok(SessionFile {
            sessions,
            last_session: raw.last_session,
        })
    }

    fn invalid(&self, reason: String) -> BranchyardError {
        BranchyardError::InvalidSessions {
            path: self.path.clone(),
            reason,
        }
    }

    fn write(&self, file: &SessionFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create sessions directory: {}", parent.display())
                })?;
            }
        }

        let contents =
            serde_json::to_string_pretty(file).context("Failed to serialize sessions")?;
        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write sessions file: {}", self.path.display()))
    }

    /// Upsert `name`, stamp `saved_at`, and make it the last session
    pub fn save(&self, name: &str, session: Session) -> Result<Session> {
        let mut file = self.load()?;
        let session = Session {
            saved_at: Some(Utc::now()),
            ..session
        };
        file.sessions.insert(name.to_string(), session.clone());
        file.last_session = Some(name.to_string());
        self.write(&file)?;

        tracing::debug!(session = name, "session saved");
        Ok(session)
    }

    pub fn get(&self, name: &str) -> Result<Option<Session>> {
        Ok(self.load()?.sessions.remove(name))
    }

    pub fn list(&self) -> Result<BTreeMap<String, Session>> {
        Ok(self.load()?.sessions)
    }

    /// Delete `name`; returns whether it existed. Clears the last pointer
    /// when it referenced the deleted session.
    pub fn delete(&self, name: &str) -> Result<bool> {
        let mut file = self.load()?;
        let existed = file.sessions.remove(name).is_some();
        if file.last_session.as_deref() == Some(name) {
            file.last_session = None;
        }
        self.write(&file)?;
        Ok(existed)
    }

    /// The session the last pointer references, with its name
    pub fn get_last(&self) -> Result<Option<(String, Session)>> {
        let mut file = self.load()?;
        Ok(file
            .last_session
            .take()
            .and_then(|name| file.sessions.remove(&name).map(|s| (name, s))))
    }
}

//! Editor registry: editor identifier -> launch command

use std::collections::BTreeMap;

/// Editors known out of the box
pub const BUILTIN_EDITORS: &[(&str, &str)] = &[
    ("vscode", "code"),
    ("cursor", "cursor"),
    ("windsurf", "windsurf"),
    ("trae", "trae"),
    ("zed", "zed"),
];

/// Fallback editor when nothing is configured and no prompt is possible
pub const FALLBACK_EDITOR: &str = "vscode";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorRegistry {
    commands: BTreeMap<String, String>,
}

impl Default for EditorRegistry {
    fn default() -> Self {
        Self {
            commands: BUILTIN_EDITORS
                .iter()
                .map(|(id, cmd)| ((*id).to_string(), (*cmd).to_string()))
                .collect(),
        }
    }
}

impl EditorRegistry {
    /// Built-in editors with `extra` layered on top (extra wins on clashes)
    pub fn with_extra<'a>(extra: impl IntoIterator<Item = (&'a String, &'a String)>) -> Self {
        let mut registry = Self::default();
        for (id, cmd) in extra {
            registry.commands.insert(id.clone(), cmd.clone());
        }
        registry
    }

    /// Launch command for an editor id
    pub fn command_for(&self, editor: &str) -> Option<&str> {
        self.commands.get(editor).map(String::as_str)
    }

    /// Editor ids, with the built-ins first in their canonical order
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = BUILTIN_EDITORS
            .iter()
            .map(|(id, _)| (*id).to_string())
            .filter(|id| self.commands.contains_key(id))
            .collect();
        for id in self.commands.keys() {
            if !ids.contains(id) {
                ids.push(id.clone());
            }
        }
        ids
    }
}

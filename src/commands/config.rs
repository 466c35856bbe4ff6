//! Interactive settings menu
//! Usage: branchyard config

use anyhow::Result;
use serde_json::Value;

use super::common::Environment;
use crate::config::{Config, ConfigStore};
use crate::output;
use crate::prompt::Prompter;

const MENU: [&str; 5] = [
    "Set default editor",
    "Edit workspace template",
    "View current config",
    "Reset config",
    "Exit",
];

pub fn execute(env: &Environment) -> Result<()> {
    run_menu(env.prompter.as_ref(), &env.config)
}

/// Loop over the menu until the user picks Exit
fn run_menu(prompter: &dyn Prompter, store: &ConfigStore) -> Result<()> {
    let items: Vec<String> = MENU.iter().map(|s| (*s).to_string()).collect();

    loop {
        let mut config = store.load()?;
        match prompter.select("Configuration", &items)? {
            0 => {
                let ids = config.editor_registry().ids();
                let choice = prompter.select("Select default editor", &ids)?;
                if let Some(editor) = ids.get(choice) {
                    config.default_editor = Some(editor.clone());
                    store.save(&config)?;
                    output::success(format!("Default editor set to {editor}"));
                }
            }
            1 => edit_template(prompter, store, config)?,
            2 => {
                println!("Config file: {}", store.path().display());
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
            3 => {
                if prompter.confirm("Reset config to defaults?", false)? {
                    store.save(&Config::default())?;
                    output::success("Config reset");
                }
            }
            _ => return Ok(()),
        }
    }
}

fn edit_template(prompter: &dyn Prompter, store: &ConfigStore, mut config: Config) -> Result<()> {
    let current = config
        .workspace_template
        .as_ref()
        .map(serde_json::to_string)
        .transpose()?
        .unwrap_or_else(|| "{}".to_string());

    let answer = prompter.input("Workspace template JSON", Some(current.as_str()))?;
    match serde_json::from_str::<Value>(&answer) {
        Ok(Value::Object(map)) => {
            config.workspace_template = (!map.is_empty()).then_some(map);
            store.save(&config)?;
            output::success("Workspace template saved");
        }
        Ok(_) => output::failure("Workspace template must be a JSON object. Not saved."),
        Err(e) => output::failure(format!("Invalid JSON: {e}. Not saved.")),
    }
    Ok(())
}

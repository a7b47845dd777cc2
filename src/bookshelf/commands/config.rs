use crate::commands::{CmdMessage, CmdResult};
use crate::config::BookshelfConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Unlike the catalog commands, config errors that are not about the
/// requested key (unreadable or unwritable config file) are returned.
pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = BookshelfConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {
            for key in BookshelfConfig::keys() {
                if let Some(val) = config.get(key) {
                    result.add_message(CmdMessage::info(format!("{} = {}", key, val)));
                }
            }
        }
        ConfigAction::ShowKey(key) => match config.get(&key) {
            Some(val) => result.add_message(CmdMessage::info(val)),
            None => {
                result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
            }
        },
        ConfigAction::Set(key, value) => {
            if let Err(e) = config.set(&key, &value) {
                result.add_message(CmdMessage::error(e.to_string()));
                return Ok(result);
            }
            config.save(config_dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
        }
    }

    Ok(result)
}

use crate::commands::{CmdMessage, CmdResult};
use crate::config::JournalConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = JournalConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {
            for key in JournalConfig::keys() {
                result.add_message(CmdMessage::info(format!("{} = {}", key, config.get(key)?)));
            }
        }
        ConfigAction::ShowKey(key) => {
            let value = config.get(&key)?;
            result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!("{} set to {}", key, value)));
        }
    }

    Ok(result.with_config(config))
}

use crate::commands::{CmdMessage, CmdResult};
use crate::config::{GalleryConfig, CONFIG_KEYS};
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = GalleryConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = GalleryConfig::load(dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => result.add_message(CmdMessage::error(format!(
                    "Unknown config key: {} (expected one of: {})",
                    key,
                    CONFIG_KEYS.join(", ")
                ))),
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = GalleryConfig::load(dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e));
                return Ok(res);
            }
            config.save(dir)?;
            tracing::info!(key = %key, value = %value, "updated config");

            let display_val = config.get(&key).unwrap_or_else(|| value.clone());
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::sort::SortMode;
    use crate::commands::MessageLevel;

    #[test]
    fn show_all_returns_defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(GalleryConfig::default()));
    }

    #[test]
    fn set_persists_and_reports() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(
            dir.path(),
            ConfigAction::Set("sort".into(), "popularity".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].content, "sort set to popular");

        let loaded = GalleryConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.sort, SortMode::Popular);
    }

    #[test]
    fn invalid_value_is_an_error_message() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::Set("columns".into(), "0".into())).unwrap();
        assert!(matches!(result.messages[0].level, MessageLevel::Error));
        assert!(!dir.path().join("config.json").exists());
    }

    #[test]
    fn show_unknown_key_is_an_error_message() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowKey("theme".into())).unwrap();
        assert!(matches!(result.messages[0].level, MessageLevel::Error));
    }
}

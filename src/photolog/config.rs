use crate::calendar::WeekStart;
use crate::error::{JournalError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_UPLOAD_ENDPOINT: &str = "https://api.imgbb.com/1/upload";

/// Configuration for photolog, stored in the data dir as config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JournalConfig {
    /// Which day week rows begin on
    #[serde(default)]
    pub week_start: WeekStart,

    /// Image hosting endpoint for uploads
    #[serde(default = "default_upload_endpoint")]
    pub upload_endpoint: String,

    /// Access key sent with every upload request
    #[serde(default)]
    pub upload_key: String,
}

fn default_upload_endpoint() -> String {
    DEFAULT_UPLOAD_ENDPOINT.to_string()
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            week_start: WeekStart::Sunday,
            upload_endpoint: default_upload_endpoint(),
            upload_key: String::new(),
        }
    }
}

impl JournalConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(JournalError::Io)?;
        let config: JournalConfig =
            serde_json::from_str(&content).map_err(JournalError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(JournalError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(JournalError::Serialization)?;
        fs::write(config_path, content).map_err(JournalError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "week-start" => Ok(match self.week_start {
                WeekStart::Sunday => "sunday".to_string(),
                WeekStart::Monday => "monday".to_string(),
            }),
            "upload-endpoint" => Ok(self.upload_endpoint.clone()),
            "upload-key" => Ok(self.upload_key.clone()),
            other => Err(JournalError::Api(format!("Unknown config key: {}", other))),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "week-start" => {
                self.week_start = match value {
                    "sunday" => WeekStart::Sunday,
                    "monday" => WeekStart::Monday,
                    other => {
                        return Err(JournalError::Api(format!(
                            "week-start must be 'sunday' or 'monday', got '{}'",
                            other
                        )))
                    }
                };
            }
            "upload-endpoint" => self.upload_endpoint = value.to_string(),
            "upload-key" => self.upload_key = value.to_string(),
            other => return Err(JournalError::Api(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &["week-start", "upload-endpoint", "upload-key"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = JournalConfig::default();
        assert_eq!(config.week_start, WeekStart::Sunday);
        assert_eq!(config.upload_endpoint, DEFAULT_UPLOAD_ENDPOINT);
        assert!(config.upload_key.is_empty());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = JournalConfig::load(temp_dir.path().join("nope")).unwrap();
        assert_eq!(config, JournalConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();

        let mut config = JournalConfig::default();
        config.set("week-start", "monday").unwrap();
        config.set("upload-key", "abc123").unwrap();
        config.save(temp_dir.path()).unwrap();

        let loaded = JournalConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.week_start, WeekStart::Monday);
        assert_eq!(loaded.upload_key, "abc123");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let mut config = JournalConfig::default();
        assert!(config.set("nope", "x").is_err());
        assert!(config.get("nope").is_err());
    }

    #[test]
    fn test_week_start_value_validated() {
        let mut config = JournalConfig::default();
        assert!(config.set("week-start", "tuesday").is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = JournalConfig {
            week_start: WeekStart::Monday,
            upload_endpoint: "https://example.test/upload".to_string(),
            upload_key: "k".to_string(),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: JournalConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, parsed);
    }
}

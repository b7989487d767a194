use crate::error::{BiverseError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Keys accepted by [`BiverseConfig::get`] and [`BiverseConfig::set`].
pub const CONFIG_KEYS: [&str; 1] = ["data-file"];

/// Configuration for biverse, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BiverseConfig {
    /// Verses JSON file to load instead of the bundled corpus
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

impl BiverseConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: BiverseConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    /// Display value for a key, `None` for unknown keys.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(
                self.data_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(bundled)".to_string()),
            ),
            _ => None,
        }
    }

    /// Set a key from its string form. An empty value resets it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "data-file" => {
                let value = value.trim();
                self.data_file = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
                Ok(())
            }
            _ => Err(BiverseError::Api(format!("Unknown config key: {}", key))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_bundled_data() {
        let config = BiverseConfig::default();
        assert_eq!(config.data_file, None);
        assert_eq!(config.get("data-file").as_deref(), Some("(bundled)"));
    }

    #[test]
    fn test_set_and_reset_data_file() {
        let mut config = BiverseConfig::default();
        config.set("data-file", "/srv/verses.json").unwrap();
        assert_eq!(config.data_file, Some(PathBuf::from("/srv/verses.json")));
        config.set("data-file", "").unwrap();
        assert_eq!(config.data_file, None);
    }

    #[test]
    fn test_unknown_key() {
        let mut config = BiverseConfig::default();
        assert_eq!(config.get("colour"), None);
        assert!(config.set("colour", "blue").is_err());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = BiverseConfig::load(temp_dir.path().join("missing")).unwrap();
        assert_eq!(config, BiverseConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("nested");

        let mut config = BiverseConfig::default();
        config.set("data-file", "verses.json").unwrap();
        config.save(&dir).unwrap();

        let loaded = BiverseConfig::load(&dir).unwrap();
        assert_eq!(loaded, config);
    }
}

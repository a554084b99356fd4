use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// The case the demonstration binary runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoConfig {
    pub sequence: Vec<i32>,
    pub target: i32,
    pub expected: Option<i32>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            sequence: vec![2, 7, 11, 15],
            target: 9,
            expected: Some(9),
        }
    }
}

impl DemoConfig {
    /// Load from an explicit path. A missing file is created with the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config: DemoConfig = confy::load_path(path)
            .with_context(|| format!("Failed to load demo config from {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        confy::store_path(path, self)
            .with_context(|| format!("Failed to save demo config to {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = DemoConfig::default();
        assert_eq!(config.sequence, vec![2, 7, 11, 15]);
        assert_eq!(config.target, 9);
        assert_eq!(config.expected, Some(9));
    }

    #[test]
    fn test_load_missing_file_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("demo.toml");

        let config = DemoConfig::load_from(&path).unwrap();
        assert_eq!(config, DemoConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("demo.toml");

        let config = DemoConfig {
            sequence: vec![3, 3],
            target: 6,
            expected: None,
        };
        config.save_to(&path).unwrap();

        let loaded = DemoConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_malformed_file_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("demo.toml");
        std::fs::write(&path, "sequence = \"not a list\"\ntarget = 9\n").unwrap();

        let err = DemoConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to load demo config"));
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = DemoConfig {
            sequence: vec![-1, 1],
            target: 0,
            expected: Some(0),
        };

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: DemoConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, config);
    }
}

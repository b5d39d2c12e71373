//! Color configuration.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

use crate::cache::DEFAULT_CAPACITY;

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ColorConfig {
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub names: NamesConfig,
}

impl ColorConfig {
    /// Load configuration from `path`, or use defaults when it does not exist.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            let config = Self::from_toml(&contents)?;
            info!("Loaded color config from {}", path.display());
            Ok(config)
        } else {
            info!("No {} found, using default color config", path.display());
            Ok(Self::default())
        }
    }

    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Construction cache settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Maximum cached constructions (0 disables the cache).
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

/// Extra named colors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct NamesConfig {
    /// Replace built-in names instead of keeping them.
    #[serde(default, rename = "override")]
    pub override_builtin: bool,
    /// Name to color, in any string form a color can be parsed from.
    #[serde(default)]
    pub entries: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ColorConfig::from_toml("").unwrap();
        assert_eq!(config, ColorConfig::default());
        assert_eq!(config.cache.capacity, 512);
        assert!(!config.names.override_builtin);
        assert!(config.names.entries.is_empty());
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = ColorConfig::default();
        config.cache.capacity = 64;
        config.names.entries.insert("ocean".into(), "#006994".into());
        let text = config.to_toml().unwrap();
        assert_eq!(ColorConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file() {
        let config = ColorConfig::load("definitely/not/here/colors.toml").unwrap();
        assert_eq!(config, ColorConfig::default());
    }

    #[test]
    fn test_load_file() {
        let path = std::env::temp_dir().join(format!("colortools-{}.toml", std::process::id()));
        std::fs::write(&path, "[cache]\ncapacity = 3\n").unwrap();
        let config = ColorConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.cache.capacity, 3);
    }

    #[test]
    fn test_rejects_bad_types() {
        assert!(ColorConfig::from_toml("[cache]\ncapacity = \"big\"\n").is_err());
    }
}

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::Result;

/// Optional YAML configuration.
///
/// ```yaml
/// aliases:
///   YaBrowser: Yandex Browser
/// threads: 4
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Extra product-name → browser-name aliases, checked before the built-in table.
    pub aliases: IndexMap<String, String>,
    /// Worker threads for batch classification. `None` uses rayon's default.
    pub threads: Option<usize>,
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to a map.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_config() {
        let config = Config::from_yaml("aliases:\n  YaBrowser: Yandex Browser\n  Vivaldi: Vivaldi\nthreads: 4\n").unwrap();
        assert_eq!(config.threads, Some(4));
        let keys: Vec<_> = config.aliases.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["YaBrowser", "Vivaldi"]);
    }

    #[test]
    fn empty_config() {
        let config = Config::from_yaml("").unwrap();
        assert!(config.aliases.is_empty());
        assert_eq!(config.threads, None);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Config::from_yaml("alias: {}\n").is_err());
    }
}

//! Configuration management for convo

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Export settings
    pub export: ExportConfig,
}

/// Export-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Default export format
    pub default_format: String,
    /// Pretty-print structured-record output
    pub pretty: bool,
    /// Default sink file for the structured-record format
    pub records_file: String,
    /// Default sink file for the markup format
    pub markup_file: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            default_format: "json".to_string(),
            pretty: true,
            records_file: "comments_tree.json".to_string(),
            markup_file: "comments_tree.xml".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.export.default_format, "json");
        assert!(config.export.pretty);
        assert_eq!(config.export.records_file, "comments_tree.json");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        assert!(toml.contains("[export]"));

        let config2: Config = toml::from_str(&toml).unwrap();
        assert_eq!(config.export.default_format, config2.export.default_format);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str("[export]\ndefault_format = \"xml\"\n").unwrap();
        assert_eq!(config.export.default_format, "xml");
        assert!(config.export.pretty);
    }
}

//! User configuration persistence
//!
//! Stores document defaults in `~/.config/csvdoc/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::csv::{DetectHeader, DocumentOptions, HeaderPolicy, PrefixDetector, DEFAULT_DELIMITER};

/// Defaults applied when opening documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvdocConfig {
    /// Literal field delimiter
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Whether documents carry a header row
    #[serde(default = "default_has_header")]
    pub has_header: bool,

    /// Header is the first line starting with this prefix; lines before it
    /// are comments. Without a prefix the first line is the header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_prefix: Option<String>,

    /// Ignore case when resolving column names
    #[serde(default = "default_ignore_case")]
    pub ignore_case: bool,
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

fn default_has_header() -> bool {
    true
}

fn default_ignore_case() -> bool {
    true
}

impl Default for CsvdocConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            has_header: default_has_header(),
            header_prefix: None,
            ignore_case: default_ignore_case(),
        }
    }
}

impl CsvdocConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Header policy described by `has_header` and `header_prefix`
    pub fn header_policy(&self) -> HeaderPolicy {
        let detector = self
            .header_prefix
            .as_ref()
            .map(|prefix| Box::new(PrefixDetector::new(prefix.clone())) as Box<dyn DetectHeader>);
        HeaderPolicy::from_parts(self.has_header, detector)
    }

    pub fn document_options(&self) -> DocumentOptions {
        DocumentOptions::new(self.delimiter.clone(), self.header_policy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config: CsvdocConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, CsvdocConfig::default());
    }

    #[test]
    fn test_partial_yaml() {
        let config: CsvdocConfig =
            serde_yaml::from_str("delimiter: \";\"\nheader_prefix: \"#H\"\n").unwrap();
        assert_eq!(config.delimiter, ";");
        assert!(config.has_header);
        assert_eq!(config.header_prefix.as_deref(), Some("#H"));
        assert!(config.ignore_case);
    }

    #[test]
    fn test_header_policy_mapping() {
        let mut config = CsvdocConfig::default();
        assert!(matches!(config.header_policy(), HeaderPolicy::FirstLine));

        config.header_prefix = Some("#H".to_string());
        assert!(matches!(config.header_policy(), HeaderPolicy::Detect(_)));

        config.has_header = false;
        assert!(matches!(config.header_policy(), HeaderPolicy::Disabled));
    }

    #[test]
    fn test_document_options_carry_delimiter() {
        let config = CsvdocConfig {
            delimiter: "\t".to_string(),
            ..Default::default()
        };
        assert_eq!(config.document_options().delimiter, "\t");
    }
}

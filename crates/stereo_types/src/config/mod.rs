//! Configuration system
//!
//! Configuration and manifests travel as TOML or RON text. Callers own the
//! reading and writing of files; this module only picks a format and
//! converts.

pub use serde::{Deserialize, Serialize};

/// Supported text formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML
    Toml,
    /// Rusty Object Notation
    Ron,
}

impl ConfigFormat {
    /// Pick a format from a file name, path or bare extension
    pub fn from_hint(hint: &str) -> Result<Self, ConfigError> {
        let extension = hint.rsplit('.').next().unwrap_or(hint);
        match extension.to_ascii_lowercase().as_str() {
            "toml" => Ok(Self::Toml),
            "ron" => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(hint.to_string())),
        }
    }
}

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Parse configuration text in the given format
    fn from_str_with(contents: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        match format {
            ConfigFormat::Toml => toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string())),
            ConfigFormat::Ron => ron::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string())),
        }
    }

    /// Serialize configuration to text in the given format
    fn to_string_with(&self, format: ConfigFormat) -> Result<String, ConfigError> {
        match format {
            ConfigFormat::Toml => toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string())),
            ConfigFormat::Ron => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string())),
        }
    }

    /// Parse TOML text
    fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Self::from_str_with(contents, ConfigFormat::Toml)
    }

    /// Parse RON text
    fn from_ron(contents: &str) -> Result<Self, ConfigError> {
        Self::from_str_with(contents, ConfigFormat::Ron)
    }

    /// Serialize to TOML
    fn to_toml(&self) -> Result<String, ConfigError> {
        self.to_string_with(ConfigFormat::Toml)
    }

    /// Serialize to RON
    fn to_ron(&self) -> Result<String, ConfigError> {
        self.to_string_with(ConfigFormat::Ron)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Which checks [`Catalog::validate`](crate::Catalog::validate) runs
///
/// Uniqueness of names and specializations is always checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Fail if any required scalar/dimension combination has no alias
    pub require_full_coverage: bool,
    /// Fail if an alias name does not encode what it resolves to
    pub check_names: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            require_full_coverage: true,
            check_names: true,
        }
    }
}

impl Config for ValidationConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_hint() {
        assert_eq!(ConfigFormat::from_hint("validation.toml"), Ok(ConfigFormat::Toml));
        assert_eq!(ConfigFormat::from_hint("aliases.RON"), Ok(ConfigFormat::Ron));
        assert_eq!(ConfigFormat::from_hint("ron"), Ok(ConfigFormat::Ron));
        assert!(matches!(
            ConfigFormat::from_hint("aliases.json"),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = ValidationConfig::from_toml("check_names = false\n").expect("valid toml");
        assert!(!config.check_names);
        assert!(config.require_full_coverage);
    }

    #[test]
    fn test_ron_roundtrip() {
        let config = ValidationConfig {
            require_full_coverage: false,
            check_names: true,
        };
        let text = config.to_ron().expect("serializable");
        assert_eq!(ValidationConfig::from_ron(&text), Ok(config));
    }

    #[test]
    fn test_parse_error() {
        let result = ValidationConfig::from_toml("check_names = maybe");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}

//! Interview engine configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::intake::{EngineSettings, DEFAULT_TITLE_MAX_CHARS};

/// Longest case title the engine may be configured to keep.
pub const MAX_TITLE_CHARS: usize = 500;

/// Engine configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum characters kept from a description answer for the case title
    #[serde(default = "default_title_max_chars")]
    pub title_max_chars: usize,
}

impl EngineConfig {
    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title_max_chars == 0 || self.title_max_chars > MAX_TITLE_CHARS {
            return Err(ValidationError::InvalidTitleLength {
                actual: self.title_max_chars,
                max: MAX_TITLE_CHARS,
            });
        }
        Ok(())
    }

    /// Settings handed to the intake engine
    pub fn settings(&self) -> EngineSettings {
        EngineSettings {
            title_max_chars: self.title_max_chars,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            title_max_chars: default_title_max_chars(),
        }
    }
}

fn default_title_max_chars() -> usize {
    DEFAULT_TITLE_MAX_CHARS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_config_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.title_max_chars, 60);
        assert!(config.validate().is_ok());
        assert_eq!(config.settings(), EngineSettings::default());
    }

    #[test]
    fn test_zero_title_length_rejected() {
        let config = EngineConfig { title_max_chars: 0 };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidTitleLength { actual: 0, max: 500 })
        );
    }

    #[test]
    fn test_oversized_title_length_rejected() {
        let config = EngineConfig { title_max_chars: 501 };
        assert!(config.validate().is_err());

        let config = EngineConfig { title_max_chars: 500 };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_engine_config_deserialization() {
        let config: EngineConfig = serde_json::from_str(r#"{"title_max_chars": 80}"#).unwrap();
        assert_eq!(config.settings().title_max_chars, 80);
    }
}

//! Configuration system
//!
//! Game data for this crate (collider setups, sandbox tuning) is plain serde
//! structs; the [`Config`] trait adds file loading and saving with the format
//! picked from the file extension (`.ron` or `.toml`).

use std::path::Path;

pub use serde::{Deserialize, Serialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from a `.ron` or `.toml` file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = extension(path);
        if !matches!(format, Some("toml" | "ron")) {
            return Err(ConfigError::UnsupportedFormat(path.display().to_string()));
        }

        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        match format {
            Some("toml") => {
                toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            _ => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
        }
    }

    /// Save configuration to a `.ron` or `.toml` file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match extension(path) {
            Some("toml") => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            Some("ron") => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::ColliderConfig;

    #[test]
    fn test_collider_config_ron_round_trip() {
        let config = ColliderConfig {
            mask: 0b110,
            layer: 0b001,
            recompute_dimensions_each_query: true,
        };

        let text = ron::to_string(&config).unwrap();
        let restored: ColliderConfig = ron::from_str(&text).unwrap();
        assert_eq!(config, restored);
    }

    #[test]
    fn test_collider_config_toml_round_trip() {
        let config = ColliderConfig::default();
        let text = toml::to_string(&config).unwrap();
        let restored: ColliderConfig = toml::from_str(&text).unwrap();
        assert_eq!(config, restored);
    }

    #[test]
    fn test_unsupported_extension_is_rejected() {
        let result = ColliderConfig::load_from_file("collider.yaml");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_file_round_trip() {
        let path = std::env::temp_dir().join("collision2d_config_test.ron");
        let config = ColliderConfig {
            mask: 0xFF,
            layer: 0x1,
            recompute_dimensions_each_query: false,
        };

        config.save_to_file(&path).unwrap();
        let restored = ColliderConfig::load_from_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(config, restored);
    }
}

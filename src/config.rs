//! Codec configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::stego::keystream::INITIAL_SEED;

/// Default offset added to the checksum before seeding the keystream.
pub const DEFAULT_SEED_SHIFT: u32 = 0;

/// Keystream parameters. Encoder and decoder must agree on them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CodecConfig {
    /// Seed the keystream starts from before the checksum is known.
    pub initial_seed: u32,

    /// Added (wrapping) to the checksum to form the payload seed.
    pub seed_shift: u32,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            initial_seed: INITIAL_SEED,
            seed_shift: DEFAULT_SEED_SHIFT,
        }
    }
}

impl CodecConfig {
    /// Loads a TOML config file. Missing keys keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parses a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Keystream seed for payload pixels.
    pub fn payload_seed(&self, checksum: u32) -> u32 {
        checksum.wrapping_add(self.seed_shift)
    }
}

/// Errors from loading a [`CodecConfig`].
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Config read error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CodecConfig::default();
        assert_eq!(config.initial_seed, 0x951E_E51C);
        assert_eq!(config.seed_shift, DEFAULT_SEED_SHIFT);
        assert_eq!(config.payload_seed(0x1234), 0x1234);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = CodecConfig::from_toml("seed_shift = 5\n").unwrap();
        assert_eq!(config.seed_shift, 5);
        assert_eq!(config.initial_seed, INITIAL_SEED);
    }

    #[test]
    fn test_payload_seed_wraps() {
        let config = CodecConfig {
            seed_shift: 2,
            ..Default::default()
        };
        assert_eq!(config.payload_seed(u32::MAX), 1);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            CodecConfig::from_toml("seed_shift = \"five\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pngpeek.toml");
        std::fs::write(&path, "initial_seed = 1\nseed_shift = 2\n").unwrap();

        let config = CodecConfig::from_file(&path).unwrap();
        assert_eq!(config, CodecConfig { initial_seed: 1, seed_shift: 2 });
    }
}

use serde::{Deserialize, Serialize};

use crate::error::StreamError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamConfig {
    /// Path of the checkpoint file holding the last processed height.
    #[serde(default = "default_checkpoint_path")]
    pub checkpoint_path: String,
    /// Replay begins after this height when no checkpoint exists yet.
    #[serde(default)]
    pub start_height: u64,
    /// Capacity of the event channel between the stream source and the
    /// consumer loop.
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

fn default_checkpoint_path() -> String {
    "./checkpoint.bin".to_string()
}

fn default_channel_capacity() -> usize {
    256
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            checkpoint_path: default_checkpoint_path(),
            start_height: 0,
            channel_capacity: default_channel_capacity(),
        }
    }
}

impl StreamConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self, StreamError> {
        let contents = std::fs::read_to_string(path).map_err(|e| StreamError::Config {
            reason: format!("failed to read config file '{}': {}", path, e),
        })?;
        let config: StreamConfig = toml::from_str(&contents).map_err(|e| StreamError::Config {
            reason: format!("failed to parse config file '{}': {}", path, e),
        })?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = StreamConfig::default();
        assert_eq!(config.checkpoint_path, "./checkpoint.bin");
        assert_eq!(config.start_height, 0);
        assert_eq!(config.channel_capacity, 256);
    }

    #[test]
    fn test_load_applies_serde_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stream.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "checkpoint_path = \"/var/lib/fis/ckpt.bin\"").unwrap();
        writeln!(file, "start_height = 42").unwrap();

        let config = StreamConfig::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.checkpoint_path, "/var/lib/fis/ckpt.bin");
        assert_eq!(config.start_height, 42);
        assert_eq!(config.channel_capacity, 256); // defaulted
    }

    #[test]
    fn test_load_missing_file_is_config_error() {
        let err = StreamConfig::load("/no/such/stream.toml").unwrap_err();
        assert!(matches!(err, StreamError::Config { .. }));
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "start_height = \"not a number\"").unwrap();
        let err = StreamConfig::load(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, StreamError::Config { .. }));
    }
}

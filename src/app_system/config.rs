use std::path::PathBuf;

use crate::store::STORAGE_KEY;

/// Runtime configuration for the gym system.
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | GYM_DATA_DIR | ./gym-data | Directory of the JSON snapshot file |
/// | GYM_STORAGE_KEY | gym_app_data | Key the snapshot is stored under |
/// | GYM_CHANNEL_BUFFER | 32 | Service mailbox size |
///
/// ```ignore
/// GYM_DATA_DIR=/var/lib/gym RUST_LOG=debug cargo run
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GymConfig {
    pub data_dir: PathBuf,
    pub storage_key: String,
    pub channel_buffer: usize,
}

impl GymConfig {
    /// Loads configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var("GYM_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./gym-data")),
            storage_key: std::env::var("GYM_STORAGE_KEY").unwrap_or_else(|_| STORAGE_KEY.into()),
            channel_buffer: std::env::var("GYM_CHANNEL_BUFFER")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&n: &usize| n > 0)
                .unwrap_or(32),
        }
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }
}

impl Default for GymConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./gym-data"),
            storage_key: STORAGE_KEY.to_string(),
            channel_buffer: 32,
        }
    }
}

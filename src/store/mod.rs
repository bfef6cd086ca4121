//! Persistence port for the whole-snapshot key-value store.
//!
//! The core reads the snapshot once at startup and rewrites it after every
//! successful mutation. Adapters decide where the bytes live.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use thiserror::Error;
use tracing::info;

use crate::domain::AppData;
use crate::error::GymError;

/// Fixed application key the snapshot is stored under.
pub const STORAGE_KEY: &str = "gym_app_data";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<StoreError> for GymError {
    fn from(err: StoreError) -> Self {
        GymError::Persistence(err.to_string())
    }
}

/// Whole-snapshot load/save keyed by the application key.
pub trait AppStore: Send {
    /// `None` when nothing has been stored under `key` yet.
    fn load(&self, key: &str) -> Result<Option<AppData>, StoreError>;

    /// Writes the snapshot; on error the previous value stays intact.
    fn save(&self, key: &str, data: &AppData) -> Result<(), StoreError>;
}

/// Stored snapshot, or the first-run seed when the key is empty.
pub fn load_or_seed(store: &dyn AppStore, key: &str) -> Result<AppData, StoreError> {
    match store.load(key)? {
        Some(data) => {
            info!(key, members = data.member_count(), "Loaded stored snapshot");
            Ok(data)
        }
        None => {
            info!(key, "No stored snapshot, seeding defaults");
            Ok(AppData::seed())
        }
    }
}

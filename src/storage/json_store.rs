//! JSON-file backend for the app-state blob.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{error, info};

use crate::domain::models::AppState;
use crate::storage::StateStore;

/// File name of the persisted blob inside the data directory.
pub const STATE_FILE_NAME: &str = "heart-rewards-app-state.json";

/// Stores the app state as a single JSON file in a data directory.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `data_dir`, creating the directory if it
    /// does not exist yet.
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let dir = data_dir.as_ref().to_path_buf();
        if !dir.exists() {
            fs::create_dir_all(&dir)
                .with_context(|| format!("create data directory {}", dir.display()))?;
        }
        Ok(Self {
            path: dir.join(STATE_FILE_NAME),
        })
    }

    /// Path of the blob file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for JsonFileStore {
    fn load(&self) -> AppState {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(
                    "No persisted state at {}, starting with defaults",
                    self.path.display()
                );
                return AppState::default();
            }
            Err(e) => {
                error!(
                    "Failed to read app state from {}: {}",
                    self.path.display(),
                    e
                );
                return AppState::default();
            }
        };

        match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(value) => AppState::from_json_value(&value),
            Err(e) => {
                error!("Stored app state is not valid JSON, starting fresh: {}", e);
                AppState::default()
            }
        }
    }

    fn save(&self, state: &AppState) -> Result<()> {
        let json = serde_json::to_string_pretty(state).context("serialize app state")?;
        fs::write(&self.path, json)
            .with_context(|| format!("write app state to {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Currency, Task};
    use tempfile::TempDir;

    fn store() -> (JsonFileStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path()).unwrap();
        (store, dir)
    }

    #[test]
    fn test_load_without_blob_returns_defaults() {
        let (store, _dir) = store();
        assert_eq!(store.load(), AppState::default());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let (store, _dir) = store();
        let state = AppState {
            child_name: "Keiko".to_string(),
            currency: Currency::Usd,
            hearts: 12,
            money: 4.5,
            tasks: vec![Task {
                id: "t1".to_string(),
                text: "Clean room".to_string(),
                reward_value: 5,
            }],
            claimed_rewards: vec!["r1".to_string()],
            ..AppState::default()
        };

        store.save(&state).unwrap();
        assert_eq!(store.load(), state);
    }

    #[test]
    fn test_load_partial_blob_defaults_missing_fields() {
        let (store, _dir) = store();
        fs::write(
            store.path(),
            r#"{"childName":"Keiko","hearts":7,"tasks":[]}"#,
        )
        .unwrap();

        let state = store.load();
        assert_eq!(state.child_name, "Keiko");
        assert_eq!(state.hearts, 7);
        assert_eq!(state.currency, Currency::Yen);
        assert!(state.purchases.is_empty());
        assert!(state.activity_history.is_empty());
    }

    #[test]
    fn test_load_corrupt_blob_returns_defaults() {
        let (store, _dir) = store();
        fs::write(store.path(), "not json at all {{{").unwrap();
        assert_eq!(store.load(), AppState::default());
    }

    #[test]
    fn test_new_creates_the_data_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested").join("data");
        let store = JsonFileStore::new(&nested).unwrap();
        assert!(nested.exists());
        assert_eq!(store.path().file_name().unwrap(), STATE_FILE_NAME);
    }
}

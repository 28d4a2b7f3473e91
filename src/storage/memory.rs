//! In-memory backend for tests and ephemeral sessions.

use std::cell::RefCell;

use anyhow::Result;

use crate::domain::models::AppState;
use crate::storage::StateStore;

/// Keeps the serialized blob in memory. Single-threaded by design, matching
/// the application's execution model.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blob: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last saved blob, if any.
    pub fn blob(&self) -> Option<String> {
        self.blob.borrow().clone()
    }

    /// Seed the store with a blob, as if it had been saved earlier.
    pub fn set_blob(&self, blob: &str) {
        *self.blob.borrow_mut() = Some(blob.to_string());
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> AppState {
        match &*self.blob.borrow() {
            Some(raw) => match serde_json::from_str::<serde_json::Value>(raw) {
                Ok(value) => AppState::from_json_value(&value),
                Err(_) => AppState::default(),
            },
            None => AppState::default(),
        }
    }

    fn save(&self, state: &AppState) -> Result<()> {
        *self.blob.borrow_mut() = Some(serde_json::to_string(state)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_loads_defaults() {
        assert_eq!(MemoryStore::new().load(), AppState::default());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let store = MemoryStore::new();
        let state = AppState {
            hearts: 3,
            ..AppState::default()
        };
        store.save(&state).unwrap();
        assert_eq!(store.load(), state);
    }

    #[test]
    fn test_seeded_partial_blob_is_decoded_tolerantly() {
        let store = MemoryStore::new();
        store.set_blob(r#"{"hearts": 9}"#);
        let state = store.load();
        assert_eq!(state.hearts, 9);
        assert!(state.tasks.is_empty());
    }
}

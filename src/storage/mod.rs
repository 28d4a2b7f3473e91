//! # Storage Module
//!
//! Persistence for the single app-state blob, plus the ambient id and
//! timestamp generators.
//!
//! The whole application state serializes to one JSON document under a
//! fixed key; there are no per-entity repositories. The [`StateStore`]
//! trait abstracts the backend so the domain layer works the same against
//! a file on disk or an in-memory blob in tests.
//!
//! Loading is deliberately infallible: a missing, unreadable, or partially
//! malformed blob degrades to defaults field by field instead of failing,
//! so old blobs upgrade forward without data loss. Saving can fail, and
//! callers treat that as non-fatal.

pub mod json_store;
pub mod memory;

pub use json_store::{JsonFileStore, STATE_FILE_NAME};
pub use memory::MemoryStore;

use anyhow::Result;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::models::AppState;

/// Backend-agnostic interface for the persisted app-state blob.
pub trait StateStore {
    /// Load the persisted state, degrading to defaults when the blob is
    /// missing or unreadable.
    fn load(&self) -> AppState;

    /// Persist the full state, replacing any previous blob.
    fn save(&self, state: &AppState) -> Result<()>;
}

/// Generate a fresh globally-unique entity id. Ids are never derived from
/// content and never reused.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Current wall-clock time in epoch milliseconds. Used for display and
/// sorting only, never as a correctness mechanism.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let a = generate_id();
        let b = generate_id();
        assert_ne!(a, b);
        assert!(!a.is_empty());
    }

    #[test]
    fn test_now_millis_is_monotonic_enough() {
        let before = now_millis();
        let after = now_millis();
        assert!(after >= before);
        // Sanity: later than 2020-01-01.
        assert!(before > 1_577_836_800_000);
    }
}

//! Best-score persistence
//!
//! A single named slot holding one number. The backing store may be missing
//! or broken; callers get a default instead of an error.

#[cfg(target_arch = "wasm32")]
pub mod local_storage;

#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

/// Storage key for the best score
pub const BEST_SCORE_KEY: &str = "flappy_best";

/// Failure talking to the backing store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
}

/// A string key-value store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store (native builds and tests)
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with one entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Coerce a stored value to a score
///
/// Anything that is not a finite, non-negative number counts as 0.
pub fn parse_best_score(raw: &str) -> u32 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => v.floor().min(u32::MAX as f64) as u32,
        _ => 0,
    }
}

/// Read the best score, defaulting to 0 on absence or failure
pub fn load_best<S: KeyValueStore + ?Sized>(store: &S) -> u32 {
    match store.get(BEST_SCORE_KEY) {
        Ok(Some(raw)) => parse_best_score(&raw),
        Ok(None) => 0,
        Err(e) => {
            log::warn!("Could not load best score: {}", e);
            0
        }
    }
}

/// Write the best score; failures are logged and otherwise ignored
pub fn save_best<S: KeyValueStore + ?Sized>(store: &S, best: u32) {
    match store.set(BEST_SCORE_KEY, &best.to_string()) {
        Ok(()) => log::info!("Best score saved ({})", best),
        Err(e) => log::warn!("Could not save best score: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Store whose backend is gone
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable)
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Write {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            })
        }
    }

    #[test]
    fn test_parse_best_score() {
        assert_eq!(parse_best_score("17"), 17);
        assert_eq!(parse_best_score(" 8 "), 8);
        assert_eq!(parse_best_score("12.9"), 12);
        assert_eq!(parse_best_score(""), 0);
        assert_eq!(parse_best_score("abc"), 0);
        assert_eq!(parse_best_score("-4"), 0);
        assert_eq!(parse_best_score("NaN"), 0);
        assert_eq!(parse_best_score("inf"), 0);
    }

    #[test]
    fn test_load_and_save_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(load_best(&store), 0);
        save_best(&store, 23);
        assert_eq!(load_best(&store), 23);
        assert_eq!(store.get(BEST_SCORE_KEY).unwrap().as_deref(), Some("23"));
    }

    #[test]
    fn test_broken_store_defaults() {
        assert_eq!(load_best(&BrokenStore), 0);
        // Must not panic
        save_best(&BrokenStore, 5);
    }

    #[test]
    fn test_error_messages() {
        let e = StoreError::Read {
            key: BEST_SCORE_KEY.to_string(),
            reason: "denied".to_string(),
        };
        assert_eq!(e.to_string(), "failed to read `flappy_best`: denied");
    }
}

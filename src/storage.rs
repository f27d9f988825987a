//! Storage boundary.
//!
//! The engine never performs IO itself. Persistence goes through
//! [`StorageBackend`], a synchronous key-value contract matching a
//! browser-style local store: `get` returns the stored string if present,
//! `set` replaces the whole value in a single write. The engine uses one
//! key, [`CATALOG_KEY`], holding the JSON-serialized catalog.

use std::collections::HashMap;

/// Storage key under which the serialized catalog lives.
pub const CATALOG_KEY: &str = "products";

/// Opaque synchronous key-value storage.
pub trait StorageBackend {
    /// Fetch the value stored at `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` at `key`, replacing any previous value atomically
    /// from the caller's perspective.
    fn set(&mut self, key: &str, value: String);
}

/// In-memory backend for tests and hosts without a persistent store.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }
}

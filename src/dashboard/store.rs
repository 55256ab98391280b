//! In-memory dashboard configuration store.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;

/// Shared in-memory map of dashboard configuration entries.
///
/// Keys are caller-chosen strings, values arbitrary JSON. Empty at
/// startup; populated only through the HTTP surface. Cloning is cheap
/// and clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    entries: Arc<RwLock<HashMap<String, Value>>>,
}

impl ConfigStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all entries.
    pub async fn snapshot(&self) -> HashMap<String, Value> {
        self.entries.read().await.clone()
    }

    /// Look up a single entry.
    pub async fn get(&self, key: &str) -> Option<Value> {
        self.entries.read().await.get(key).cloned()
    }

    /// Insert or replace an entry, returning the previous value if any.
    pub async fn set(&self, key: String, value: Value) -> Option<Value> {
        self.entries.write().await.insert(key, value)
    }

    /// Remove an entry, returning it if it existed.
    pub async fn remove(&self, key: &str) -> Option<Value> {
        self.entries.write().await.remove(key)
    }
}

//! In-memory local store

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use startdeck_core::ports::{ILocalStore, StoreKey};

/// HashMap-backed implementation of the local store port
///
/// Cheap to construct and fully isolated per instance, which is exactly
/// what the sync engine's tests need. Keys are the slot names, values the
/// raw JSON blobs.
#[derive(Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<&'static str, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Synchronous peek, for test assertions
    pub fn peek(&self, key: StoreKey) -> Option<Value> {
        self.slots.lock().unwrap().get(key.as_str()).cloned()
    }

    /// Synchronous preload, for test setup
    pub fn preload(&self, key: StoreKey, value: Value) {
        self.slots.lock().unwrap().insert(key.as_str(), value);
    }
}

#[async_trait]
impl ILocalStore for MemoryStore {
    async fn get(&self, key: StoreKey) -> anyhow::Result<Option<Value>> {
        Ok(self.slots.lock().unwrap().get(key.as_str()).cloned())
    }

    async fn set(&self, key: StoreKey, value: Value) -> anyhow::Result<()> {
        self.slots.lock().unwrap().insert(key.as_str(), value);
        Ok(())
    }
}

#![cfg(test)]
use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::errors::ServiceError;
use crate::settings::SettingsStore;

/// In-memory settings store for unit tests.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn with(entries: &[(&str, Value)]) -> Self {
        let map = entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        Self { entries: RwLock::new(map) }
    }
}

#[async_trait]
impl SettingsStore for MemoryStore {
    async fn get(&self, name: &str) -> Option<Value> {
        self.entries.read().await.get(name).cloned()
    }

    async fn set(&self, name: &str, value: Value) -> Result<(), ServiceError> {
        self.entries.write().await.insert(name.to_string(), value);
        Ok(())
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::ServiceError;
use crate::settings::SettingsStore;
use crate::storage::json_map_store::JsonMapStore;

/// File-backed settings store.
/// Keeps a map of `name -> value` persisted as a single JSON object.
pub struct FileSettingsStore {
    store: Arc<JsonMapStore<String, Value>>,
}

impl FileSettingsStore {
    /// Initialize the store from the given file path. Creates the file if missing.
    pub async fn new<P: Into<std::path::PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let store = JsonMapStore::<String, Value>::new(path).await?;
        Ok(Arc::new(Self { store }))
    }
}

#[async_trait]
impl SettingsStore for FileSettingsStore {
    async fn get(&self, name: &str) -> Option<Value> {
        self.store.get(&name.to_string()).await
    }

    async fn set(&self, name: &str, value: Value) -> Result<(), ServiceError> {
        self.store.insert(name.to_string(), value).await
    }
}

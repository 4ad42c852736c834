//! The settings store seam.
//!
//! The gate, the evaluator and the admin commands only ever see a
//! `dyn SettingsStore`; where the values live is decided at startup.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::ServiceError;

/// Name-addressed settings store. Values are arbitrary JSON.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn get(&self, name: &str) -> Option<Value>;

    async fn set(&self, name: &str, value: Value) -> Result<(), ServiceError>;

    async fn get_or(&self, name: &str, default: Value) -> Value {
        self.get(name).await.unwrap_or(default)
    }

    /// String-valued lookup. Entries holding any other JSON type read as absent.
    async fn get_string(&self, name: &str) -> Option<String> {
        match self.get(name).await {
            Some(Value::String(s)) => Some(s),
            _ => None,
        }
    }
}

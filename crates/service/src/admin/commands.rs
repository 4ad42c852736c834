use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use super::sanitize::sanitize_restriction_list;
use crate::errors::ServiceError;
use crate::options::policy::{RestrictionMode, RestrictionPolicy};
use crate::options::{
    api_key, gate, parse_restriction_list, OPTION_NAME_API_KEY, OPTION_NAME_RESTRICTION_LIST,
    OPTION_NAME_RESTRICTION_TYPE,
};
use crate::settings::SettingsStore;

/// Replace the stored API key. Callers holding the old key are locked out at once.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegenerateApiKey;

impl RegenerateApiKey {
    /// Returns the new key. On entropy failure the stored key is untouched.
    pub async fn execute(self, store: &dyn SettingsStore) -> Result<String, ServiceError> {
        let key = api_key::generate_api_key()?;
        store.set(OPTION_NAME_API_KEY, Value::String(key.clone())).await?;
        info!(event = "api_key_regenerated", "api key regenerated");
        Ok(key)
    }
}

/// Form payload for saving the restriction settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaveRestrictionPolicy {
    #[serde(default)]
    pub restriction_type: String,
    #[serde(default)]
    pub restriction_list: String,
}

impl SaveRestrictionPolicy {
    /// Validate, sanitise and persist. Returns the policy now in effect.
    pub async fn execute(self, store: &dyn SettingsStore) -> Result<RestrictionPolicy, ServiceError> {
        let mode: RestrictionMode = self
            .restriction_type
            .trim()
            .parse()
            .map_err(|_| ServiceError::Validation("Invalid restriction type".into()))?;
        let list = sanitize_restriction_list(&self.restriction_list);

        store.set(OPTION_NAME_RESTRICTION_LIST, Value::String(list.clone())).await?;
        store.set(OPTION_NAME_RESTRICTION_TYPE, Value::String(mode.as_str().to_string())).await?;

        let policy = RestrictionPolicy::from_text(mode, &list);
        info!(
            event = "restrictions_saved",
            restriction_type = %mode,
            items = policy.list().len(),
            "restriction settings saved"
        );
        Ok(policy)
    }
}

/// What the admin screen shows: the current key and the stored restriction settings.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SettingsView {
    pub api_key: Option<String>,
    pub restriction_type: String,
    pub restriction_list: String,
    pub restriction_items: Vec<String>,
}

pub async fn settings_view(store: &dyn SettingsStore) -> SettingsView {
    let restriction_type = store
        .get_string(OPTION_NAME_RESTRICTION_TYPE)
        .await
        .unwrap_or_else(|| RestrictionMode::DEFAULT.as_str().to_string());
    let restriction_list = store
        .get_string(OPTION_NAME_RESTRICTION_LIST)
        .await
        .unwrap_or_else(|| OPTION_NAME_API_KEY.to_string());
    let restriction_items = parse_restriction_list(&restriction_list);
    SettingsView {
        api_key: gate::stored_api_key(store).await,
        restriction_type,
        restriction_list,
        restriction_items,
    }
}

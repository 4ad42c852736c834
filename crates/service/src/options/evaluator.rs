use serde_json::{Map, Value};
use thiserror::Error;

use super::policy::RestrictionPolicy;
use crate::settings::SettingsStore;

/// Upper bound on names accepted in one request.
pub const MAX_REQUESTED_OPTIONS: usize = 100;

const REQUEST_BODY_KEY_OPTIONS: &str = "options";

/// Malformed `get-options` request bodies.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum OptionsError {
    #[error("Options must be an array")]
    NotAnArray,
    #[error("Options must not be empty")]
    Empty,
    #[error("Options must not contain more than 100 items")]
    TooMany,
    #[error("Each option must be a string")]
    NotAString,
}

/// Validate the `options` member of a request body.
pub fn requested_options(body: &Value) -> Result<Vec<String>, OptionsError> {
    let items = body
        .get(REQUEST_BODY_KEY_OPTIONS)
        .and_then(Value::as_array)
        .ok_or(OptionsError::NotAnArray)?;
    if items.is_empty() {
        return Err(OptionsError::Empty);
    }
    if items.len() > MAX_REQUESTED_OPTIONS {
        return Err(OptionsError::TooMany);
    }
    items
        .iter()
        .map(|item| item.as_str().map(str::to_string).ok_or(OptionsError::NotAString))
        .collect()
}

/// Parse raw request bytes; anything that is not a JSON document with an
/// `options` array fails the array check.
pub fn requested_from_body(bytes: &[u8]) -> Result<Vec<String>, OptionsError> {
    let body: Value = serde_json::from_slice(bytes).map_err(|_| OptionsError::NotAnArray)?;
    requested_options(&body)
}

/// Resolve each permitted name against the store, in request order.
/// Unknown names map to `null`; names the policy refuses are left out.
pub async fn evaluate(
    requested: &[String],
    policy: &RestrictionPolicy,
    store: &dyn SettingsStore,
) -> Map<String, Value> {
    let mut options = Map::new();
    for name in requested {
        if !policy.permits(name) || options.contains_key(name) {
            continue;
        }
        let value = store.get_or(name, Value::Null).await;
        options.insert(name.clone(), value);
    }
    options
}

use subtle::ConstantTimeEq;

use super::OPTION_NAME_API_KEY;
use crate::settings::SettingsStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    Deny,
}

impl Access {
    pub fn is_allowed(self) -> bool {
        self == Access::Allow
    }
}

/// Compare a caller-supplied key with the stored secret.
///
/// A missing or empty key on either side denies. The byte comparison runs in
/// constant time for equal-length inputs; unequal lengths deny without
/// looking at content.
pub fn authorize(provided: Option<&str>, stored: Option<&str>) -> Access {
    let (Some(provided), Some(stored)) = (provided, stored) else {
        return Access::Deny;
    };
    if provided.is_empty() || stored.is_empty() {
        return Access::Deny;
    }
    if bool::from(provided.as_bytes().ct_eq(stored.as_bytes())) {
        Access::Allow
    } else {
        Access::Deny
    }
}

/// Current API key, if one has been generated.
pub async fn stored_api_key(store: &dyn SettingsStore) -> Option<String> {
    store.get_string(OPTION_NAME_API_KEY).await
}

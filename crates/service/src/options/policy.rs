use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{OPTION_NAME_API_KEY, OPTION_NAME_RESTRICTION_LIST, OPTION_NAME_RESTRICTION_TYPE};
use crate::settings::SettingsStore;

const DELIMITER_NEW_LINE: char = '\n';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestrictionMode {
    AllowAll,
    AllowOnly,
    RestrictOnly,
}

impl RestrictionMode {
    pub const DEFAULT: RestrictionMode = RestrictionMode::RestrictOnly;

    pub fn as_str(self) -> &'static str {
        match self {
            RestrictionMode::AllowAll => "allow_all",
            RestrictionMode::AllowOnly => "allow_only",
            RestrictionMode::RestrictOnly => "restrict_only",
        }
    }
}

impl fmt::Display for RestrictionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRestrictionMode(pub String);

impl fmt::Display for UnknownRestrictionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown restriction type `{}`", self.0)
    }
}

impl std::error::Error for UnknownRestrictionMode {}

impl FromStr for RestrictionMode {
    type Err = UnknownRestrictionMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "allow_all" => Ok(RestrictionMode::AllowAll),
            "allow_only" => Ok(RestrictionMode::AllowOnly),
            "restrict_only" => Ok(RestrictionMode::RestrictOnly),
            other => Err(UnknownRestrictionMode(other.to_string())),
        }
    }
}

/// Split list text on newlines, trim each line and drop the empty ones.
pub fn parse_restriction_list(text: &str) -> Vec<String> {
    text.split(DELIMITER_NEW_LINE)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Decides which setting names a caller may read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestrictionPolicy {
    /// `None` when the stored mode is unrecognised; such a policy permits nothing.
    mode: Option<RestrictionMode>,
    list: Vec<String>,
}

impl Default for RestrictionPolicy {
    fn default() -> Self {
        Self::new(RestrictionMode::DEFAULT, default_restriction_list())
    }
}

pub fn default_restriction_list() -> Vec<String> {
    vec![OPTION_NAME_API_KEY.to_string()]
}

impl RestrictionPolicy {
    pub fn new(mode: RestrictionMode, list: Vec<String>) -> Self {
        Self { mode: Some(mode), list }
    }

    pub fn from_text(mode: RestrictionMode, text: &str) -> Self {
        Self::new(mode, parse_restriction_list(text))
    }

    pub fn deny_all() -> Self {
        Self { mode: None, list: Vec::new() }
    }

    pub fn mode(&self) -> Option<RestrictionMode> {
        self.mode
    }

    pub fn list(&self) -> &[String] {
        &self.list
    }

    fn listed(&self, name: &str) -> bool {
        self.list.iter().any(|item| item == name)
    }

    pub fn permits(&self, name: &str) -> bool {
        match self.mode {
            Some(RestrictionMode::AllowAll) => true,
            Some(RestrictionMode::AllowOnly) => self.listed(name),
            Some(RestrictionMode::RestrictOnly) => !self.listed(name),
            None => false,
        }
    }

    /// Read the persisted policy, applying defaults for absent entries.
    pub async fn load(store: &dyn SettingsStore) -> Self {
        let list = match store.get_string(OPTION_NAME_RESTRICTION_LIST).await {
            Some(text) => parse_restriction_list(&text),
            None => default_restriction_list(),
        };
        let Some(raw_mode) = store.get_string(OPTION_NAME_RESTRICTION_TYPE).await else {
            return Self::new(RestrictionMode::DEFAULT, list);
        };
        match raw_mode.parse::<RestrictionMode>() {
            Ok(mode) => Self::new(mode, list),
            Err(e) => {
                warn!(error = %e, "stored restriction type is invalid; no option is readable");
                Self::deny_all()
            }
        }
    }
}

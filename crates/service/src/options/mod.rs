//! Gated option lookup.
//!
//! - `gate`: constant-time API key check.
//! - `policy`: the allow/restrict policy and its persisted form.
//! - `evaluator`: request validation and per-name filtering.
//! - `api_key`: secret generation.

pub mod api_key;
pub mod evaluator;
pub mod gate;
pub mod policy;

/// Store name of the API key secret.
pub const OPTION_NAME_API_KEY: &str = "rest_options_plugin_api_key";
/// Store name of the restriction mode (`allow_all` | `allow_only` | `restrict_only`).
pub const OPTION_NAME_RESTRICTION_TYPE: &str = "rest_options_plugin_restriction_type";
/// Store name of the newline-delimited restriction list.
pub const OPTION_NAME_RESTRICTION_LIST: &str = "rest_options_plugin_restriction_list";

pub use evaluator::{evaluate, requested_from_body, OptionsError, MAX_REQUESTED_OPTIONS};
pub use gate::{authorize, Access};
pub use policy::{parse_restriction_list, RestrictionMode, RestrictionPolicy};

use axum::{
    extract::{rejection::FormRejection, State},
    Form, Json,
};
use serde::Serialize;
use service::admin::{settings_view, RegenerateApiKey, SaveRestrictionPolicy, SettingsView};
use service::options::RestrictionMode;

use crate::errors::ApiError;
use crate::response::Success;
use crate::routes::{auth::ServerState, options_path};

#[derive(Serialize, Debug)]
pub struct AdminSettings {
    #[serde(flatten)]
    pub view: SettingsView,
    pub endpoint: String,
}

#[derive(Serialize, Debug)]
pub struct ApiKeyPayload {
    pub api_key: String,
}

#[derive(Serialize, Debug)]
pub struct RestrictionsPayload {
    pub restriction_type: Option<RestrictionMode>,
    pub restriction_items: Vec<String>,
}

/// `GET /admin/settings`
pub async fn settings(State(state): State<ServerState>) -> Json<Success<AdminSettings>> {
    let view = settings_view(state.store()).await;
    let endpoint = options_path(&state.namespace);
    Json(Success::ok("Settings retrieved.", AdminSettings { view, endpoint }))
}

/// `POST /admin/api-key`
pub async fn regenerate_api_key(
    State(state): State<ServerState>,
) -> Result<Json<Success<ApiKeyPayload>>, ApiError> {
    let api_key = RegenerateApiKey.execute(state.store()).await?;
    Ok(Json(Success::ok("API key regenerated.", ApiKeyPayload { api_key })))
}

/// `POST /admin/restrictions` (form: `restriction_type`, `restriction_list`)
pub async fn save_restrictions(
    State(state): State<ServerState>,
    form: Result<Form<SaveRestrictionPolicy>, FormRejection>,
) -> Result<Json<Success<RestrictionsPayload>>, ApiError> {
    let Form(cmd) = form.map_err(|e| ApiError::InvalidParam(e.body_text()))?;
    let policy = cmd.execute(state.store()).await?;
    Ok(Json(Success::ok(
        "Settings saved.",
        RestrictionsPayload {
            restriction_type: policy.mode(),
            restriction_items: policy.list().to_vec(),
        },
    )))
}

use std::sync::Arc;

use axum::{extract::{Request, State}, middleware::Next, response::Response};
use service::options::{authorize, gate};
use service::settings::SettingsStore;
use tracing::warn;

use crate::errors::ApiError;

pub const API_KEY_HEADER: &str = "x-api-key";

#[derive(Clone)]
pub struct ServerState {
    pub store: Arc<dyn SettingsStore>,
    /// Bearer token for `/admin/*`; `None` locks the admin surface.
    pub admin_token: Option<Arc<str>>,
    /// Route namespace without surrounding slashes, e.g. `rest-options/v1`.
    pub namespace: String,
}

impl ServerState {
    pub fn store(&self) -> &dyn SettingsStore {
        self.store.as_ref()
    }
}

/// Middleware: require the stored API key in `x-api-key`.
pub async fn require_api_key(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let stored = gate::stored_api_key(state.store()).await;
    let provided = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    if !authorize(provided, stored.as_deref()).is_allowed() {
        warn!(
            event = "api_key_rejected",
            key_present = provided.is_some(),
            key_configured = stored.is_some(),
            "rejected options request"
        );
        return Err(ApiError::Unauthorized("Invalid API key"));
    }

    Ok(next.run(req).await)
}

/// Middleware: require `Authorization: Bearer <admin token>` for admin routes.
pub async fn require_admin_token(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let provided = req
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim);

    if !authorize(provided, state.admin_token.as_deref()).is_allowed() {
        warn!(event = "admin_token_rejected", path = %req.uri().path(), "rejected admin request");
        return Err(ApiError::Unauthorized("Invalid admin token"));
    }

    Ok(next.run(req).await)
}

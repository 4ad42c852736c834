use axum::{body::Bytes, extract::State, Json};
use serde::Serialize;
use serde_json::{Map, Value};
use service::options::{evaluate, requested_from_body, RestrictionPolicy};
use tracing::debug;

use crate::errors::ApiError;
use crate::response::Success;
use crate::routes::auth::ServerState;

#[derive(Serialize, Debug)]
pub struct OptionsPayload {
    pub options: Map<String, Value>,
}

/// `POST /<namespace>/get-options`. Runs after the API key middleware.
pub async fn get_options(
    State(state): State<ServerState>,
    body: Bytes,
) -> Result<Json<Success<OptionsPayload>>, ApiError> {
    let requested = requested_from_body(&body)?;
    let store = state.store();
    let policy = RestrictionPolicy::load(store).await;
    let options = evaluate(&requested, &policy, store).await;
    debug!(requested = requested.len(), returned = options.len(), "options evaluated");
    Ok(Json(Success::ok("Options retrieved successfully.", OptionsPayload { options })))
}

use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

pub mod admin;
pub mod auth;
pub mod options;

pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

/// Path of the lookup endpoint for a namespace such as `rest-options/v1`.
pub fn options_path(namespace: &str) -> String {
    format!("/{}/get-options", namespace.trim_matches('/'))
}

/// Build the full application router: public, API-key protected, and admin routes.
pub fn build_router(state: auth::ServerState, cors: CorsLayer) -> Router {
    // Public routes
    let public = Router::new().route("/health", get(health));

    // Lookup endpoint behind the API key gate
    let api = Router::new()
        .route(&options_path(&state.namespace), post(options::get_options))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_api_key,
        ));

    // Admin routes, one per command
    let admin_routes = Router::new()
        .route("/admin/settings", get(admin::settings))
        .route("/admin/api-key", post(admin::regenerate_api_key))
        .route("/admin/restrictions", post(admin::save_restrictions))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_admin_token,
        ));

    public
        .merge(api)
        .merge(admin_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

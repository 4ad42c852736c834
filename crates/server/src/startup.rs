use std::{path::Path, sync::Arc};

use axum::Router;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes::{self, auth::ServerState};
use service::file::settings_store::FileSettingsStore;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Open the settings store and assemble the shared handler state.
pub async fn build_state(cfg: &AppConfig) -> anyhow::Result<ServerState> {
    let path = Path::new(&cfg.store.path);
    // Creates the parent directory and an empty settings file when missing.
    let store = FileSettingsStore::new(path).await?;
    info!(path = %path.display(), "settings store opened");

    let admin_token: Option<Arc<str>> = cfg.admin.token.as_deref().map(Arc::from);
    if admin_token.is_none() {
        warn!("no admin token configured; /admin routes will refuse every request");
    }

    Ok(ServerState {
        store,
        admin_token,
        namespace: cfg.routes.namespace.clone(),
    })
}

pub fn build_app(state: ServerState) -> Router {
    routes::build_router(state, build_cors())
}

/// Public entry: build the app and run the HTTP server
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg).await?;
    let endpoint = routes::options_path(&state.namespace);
    let app = build_app(state);

    let addr = cfg.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, %endpoint, store = %cfg.store.path, "starting server");
    axum::serve(listener, app).await?;
    Ok(())
}

//! HTTP entry point for the FWI prediction service.
//!
//! Loads the trained artifacts once, then serves the JSON API against that
//! immutable state. A failed artifact load is logged and the service runs
//! degraded ("model not loaded") rather than refusing to start.

use std::{env, sync::Arc};

use log::{info, warn};

use fwi_model::ArtifactStore;

mod dto;
mod routes;
mod state;

use state::AppState;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_ARTIFACT_DIR: &str = "artifacts";

#[tokio::main]
async fn main() {
    env_logger::init();

    let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);
    let artifact_dir =
        env::var("FWI_ARTIFACT_DIR").unwrap_or_else(|_| DEFAULT_ARTIFACT_DIR.to_string());

    let artifacts = match ArtifactStore::load(&artifact_dir) {
        Ok(store) => Some(store),
        Err(e) => {
            warn!("model artifacts unavailable, serving degraded: {e}");
            None
        }
    };

    let state = Arc::new(AppState::new(artifacts));
    let app = routes::router(state);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    info!("fwi_api listening on http://{addr}");
    axum::serve(listener, app).await.unwrap();
}

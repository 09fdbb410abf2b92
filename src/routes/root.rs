use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::app::AppState;
use crate::services::presets;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/healthz", get(healthz))
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    presets: usize,
}

async fn root() -> String {
    format!("bakers-formula {}", env!("CARGO_PKG_VERSION"))
}

async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        presets: presets::preset_names().len(),
    })
}

use axum::Router;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

use crate::repositories::FormulaStore;
use crate::routes;
use crate::utils::middleware;

#[derive(Clone)]
pub struct AppState {
    pub store: FormulaStore,
}

pub fn build_app() -> Router {
    build_app_with_store(FormulaStore::new())
}

pub fn build_app_with_store(store: FormulaStore) -> Router {
    let state = AppState { store };

    routes::build_routes()
        .with_state(state)
        .layer(middleware::cors_layer())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

pub mod api;
pub mod error;
pub mod state;
pub mod views;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use api::API_BASE;
pub use error::ApiError;
pub use state::{AppState, SharedState};

/// Full application router: the kanban API, view projections and `/health`.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest(API_BASE, api::api_router().merge(views::views_router()))
        .route("/health", get(health_check))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "ok"
}

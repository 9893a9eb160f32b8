use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod handlers;
pub mod types;

pub use config::ApiConfig;
pub use types::ApiState;

use handlers::{get_flow, health_check, list_flows};

/// Create API router with all endpoints
pub fn create_router(state: ApiState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/{model}/flows", get(list_flows))
        .route("/api/{model}/flows/{id}", get(get_flow))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

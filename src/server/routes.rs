//! HTTP Routes
//!
//! Axum router configuration for the batch sentiment service.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::sentiment::Scorer;

/// Application state shared across handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub scorer: Scorer,
}

impl AppState {
    pub fn new(scorer: Scorer) -> Self {
        Self { scorer }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Scorer::standard())
    }
}

/// Create the application router
///
/// With `allow_any_origin`, browser clients from any origin may call the API.
pub fn create_router(state: Arc<AppState>, allow_any_origin: bool) -> Router {
    let router = Router::new()
        .route("/sentiment", post(handlers::batch_sentiment))
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if allow_any_origin {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        router.layer(cors)
    } else {
        router
    }
}

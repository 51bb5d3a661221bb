//! Batch sentiment HTTP service
//!
//! A thin axum wrapper around the scorer. The service builds its [Scorer] once from the
//! configuration and shares it with every request; handlers never mutate it.
//!
//! # Routes
//!
//! - `POST /sentiment` - Score `{"sentences": [...]}` and return `{"results": [...]}`
//! - `GET /health` - Static liveness confirmation

pub mod handlers;
pub mod routes;

pub use handlers::{ApiError, HealthResponse};
pub use routes::{create_router, AppState};

use crate::config::MoodlexConfig;
use crate::error::Result;
use std::sync::Arc;

/// Bind the configured address and serve until the process is stopped
pub async fn serve(config: &MoodlexConfig) -> Result<()> {
    let state = Arc::new(AppState::new(config.scorer()));
    let app = create_router(state, config.server.allow_any_origin);

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "moodlex listening");

    axum::serve(listener, app).await?;
    Ok(())
}

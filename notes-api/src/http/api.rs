//! API routes definition

use super::handlers;
use super::openapi::swagger_ui;
use super::state::AppState;
use axum::{routing::get, Router};
use std::sync::Arc;

/// Build the API router with all endpoints
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Note routes
        .route(
            "/api/notes",
            get(handlers::list_notes).post(handlers::create_note),
        )
        .route(
            "/api/notes/:id",
            get(handlers::get_note)
                .put(handlers::update_note)
                .delete(handlers::delete_note),
        )
        // Operational routes
        .route("/", get(handlers::root_health))
        .route("/health", get(handlers::health_report))
        .route("/metrics", get(handlers::metrics))
        // OpenAPI / Swagger UI
        .merge(swagger_ui())
        // State
        .with_state(state)
}

//! Router configuration for the HTTP API.
//!
//! This module sets up all routes and middleware (CORS, tracing) and creates
//! the axum router ready for serving.

use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowHeaders, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// The single origin permitted to call this API.
///
/// Fixed allow-list entry for the development frontend; intentionally not
/// environment-configurable.
const ALLOWED_ORIGIN: &str = "http://localhost:5173";

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Credentialed CORS forbids wildcards, so the origin is pinned and
    // request headers are mirrored back.
    let cors = CorsLayer::new()
        .allow_origin(HeaderValue::from_static(ALLOWED_ORIGIN))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    let todos = Router::new()
        .route("/", get(handlers::list_todos).post(handlers::create_todo))
        .route(
            "/{id}",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        );

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/todos", todos)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

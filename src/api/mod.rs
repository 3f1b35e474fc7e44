//! REST API layer: route handlers, DTOs, and router composition.
//!
//! Location endpoints are mounted under `/api`; `/health` and the API
//! docs sit at the root.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod openapi;

use std::time::Duration;

use axum::Router;
use axum::middleware;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    let router = Router::new()
        .nest("/api", handlers::routes())
        .merge(handlers::system::routes());

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(openapi::swagger_ui());

    router
}

/// Builds the served application: routes, middleware, and state.
pub fn build_app(state: AppState, request_timeout: Duration) -> Router {
    build_router()
        .layer(middleware::from_fn_with_state(
            request_timeout,
            extract::enforce_timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

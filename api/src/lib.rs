//! HTTP layer of the essay coach service.
//!
//! [`app`] assembles the complete router: the essay routes plus request logging and
//! permissive CORS. The binary in `main.rs` only adds configuration, logging setup and
//! the listener.

pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::header::CONTENT_TYPE,
    middleware::from_fn,
};
use state::AppState;
use tower_http::cors::CorsLayer;

/// Builds the application router with all middleware applied.
///
/// Request bodies are not size-limited: essays may be of any length.
pub fn app(app_state: AppState) -> Router {
    let cors = CorsLayer::very_permissive().expose_headers([CONTENT_TYPE]);

    routes::routes(app_state)
        .layer(DefaultBodyLimit::disable())
        .layer(from_fn(middleware::log_request))
        .layer(cors)
}

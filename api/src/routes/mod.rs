//! HTTP route entry point.
//!
//! Route groups:
//! - `/` → Liveness endpoint (static message)
//! - `/analyze`, `/resubmit/{essay_id}`, `/monthly_report`, `/submit-essay` → Essay endpoints

use crate::routes::{essays::essay_routes, health::health_routes};
use crate::state::AppState;
use axum::Router;

pub mod essays;
pub mod health;

/// Builds the complete application router for all HTTP endpoints.
///
/// The returned router has its state applied, so it can be served or wrapped in
/// further layers directly.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(essay_routes())
        .with_state(app_state)
}

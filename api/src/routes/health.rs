use crate::state::AppState;
use axum::{Json, Router, response::IntoResponse, routing::get};
use serde::Serialize;

pub const RUNNING_MESSAGE: &str = "Essay Writing Teacher Plugin is running!";

#[derive(Serialize)]
struct StatusMessage {
    message: &'static str,
}

/// Builds the liveness route.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(home))
}

/// GET /
///
/// Returns a static message to indicate the service is running.
///
/// ### Response
/// - `200 OK`
///
/// ```json
/// { "message": "Essay Writing Teacher Plugin is running!" }
/// ```
async fn home() -> impl IntoResponse {
    Json(StatusMessage {
        message: RUNNING_MESSAGE,
    })
}

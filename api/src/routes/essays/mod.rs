//! # Essay Routes Module
//!
//! ## Structure
//! - `common.rs` → request and response bodies shared by the handlers
//! - `post.rs` → POST handlers (analyze, resubmit, legacy submit)
//! - `get.rs` → GET handlers (monthly report)

pub mod common;
pub mod get;
pub mod post;

use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

use get::monthly_report;
use post::{analyze, resubmit, submit_essay};

/// Builds the essay route group.
///
/// - `POST /analyze` → `analyze`
/// - `POST /resubmit/{essay_id}` → `resubmit`
/// - `GET /monthly_report` → `monthly_report`
/// - `POST /submit-essay` → `submit_essay`
pub fn essay_routes() -> Router<AppState> {
    Router::new()
        .route("/analyze", post(analyze))
        .route("/resubmit/{essay_id}", post(resubmit))
        .route("/monthly_report", get(monthly_report))
        .route("/submit-essay", post(submit_essay))
}

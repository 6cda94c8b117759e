use crate::response::ApiError;
use axum::{Json, extract::rejection::JsonRejection};
use grader::types::{Averages, Scores};
use serde::{Deserialize, Serialize};

pub const NO_ESSAY: &str = "No essay provided";
pub const NO_ESSAY_TEXT: &str = "No essay text provided";
pub const ESSAY_NOT_FOUND: &str = "Original essay not found";
pub const RESUBMIT_MESSAGE: &str = "Revised essay analyzed successfully!";
pub const NO_SUBMISSIONS: &str = "No essays submitted this month";

/// Body of `/analyze` and `/resubmit/{essay_id}`.
#[derive(Debug, Default, Deserialize)]
pub struct EssayRequest {
    pub essay: Option<String>,
}

/// Body of `/submit-essay`.
#[derive(Debug, Default, Deserialize)]
pub struct EssayTextRequest {
    pub essay_text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub id: i64,
    pub feedback: String,
    pub scores: Scores,
}

#[derive(Debug, Serialize)]
pub struct ResubmitResponse {
    pub message: &'static str,
    pub feedback: String,
}

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub feedback: String,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum MonthlyReportResponse {
    Report { report: String, averages: Averages },
    Empty { message: &'static str },
}

/// Unwraps a JSON body, treating an unreadable body like an empty one.
pub fn body_or_default<T: Default>(payload: Result<Json<T>, JsonRejection>) -> T {
    match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable JSON body");
            T::default()
        }
    }
}

/// Returns the field's text, or a 400 with `message` when it is absent or empty.
pub fn require_text(value: Option<String>, message: &str) -> Result<String, ApiError> {
    value
        .filter(|text| !text.is_empty())
        .ok_or_else(|| ApiError::bad_request(message))
}

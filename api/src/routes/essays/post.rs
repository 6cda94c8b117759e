use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};

use super::common::{
    AnalyzeResponse, ESSAY_NOT_FOUND, EssayRequest, EssayTextRequest, FeedbackResponse, NO_ESSAY,
    NO_ESSAY_TEXT, RESUBMIT_MESSAGE, ResubmitResponse, body_or_default, require_text,
};
use crate::{response::ApiError, state::AppState};
use db::models::essay::Model as EssayModel;

/// POST /analyze
///
/// Generates feedback for an essay, scores it and stores the submission.
///
/// ### Request Body
/// ```json
/// { "essay": "Homework should be optional because..." }
/// ```
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "id": 12,
///   "feedback": "Your thesis is clear, but...",
///   "scores": {
///     "clarity": 17, "argument": 18, "evidence": 16,
///     "organization": 19, "grammar": 15, "style": 16
///   }
/// }
/// ```
///
/// - `400 Bad Request` (missing or empty `essay`, or unreadable body)
/// ```json
/// { "error": "No essay provided" }
/// ```
///
/// - `429`, `502`, `503` when the feedback service fails, `500` when the store fails.
///   Nothing is stored in either case.
pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<EssayRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let essay = require_text(body_or_default(payload).essay, NO_ESSAY)?;

    let feedback = state.feedback().generate(&essay).await?;
    let scores = state.scorer().extract(&essay, &feedback);

    let stored = EssayModel::create(state.db(), &essay, &feedback, &scores).await?;
    tracing::info!(
        essay_id = stored.id,
        strategy = state.feedback().name(),
        "Essay analyzed"
    );

    Ok(Json(AnalyzeResponse {
        id: stored.id,
        feedback,
        scores,
    }))
}

/// POST /resubmit/{essay_id}
///
/// Generates feedback for a revised version of a stored essay. The original must exist,
/// but the revision is neither stored nor compared against it.
///
/// ### Path Parameters
/// - `essay_id` (integer): identifier returned by `/analyze`
///
/// ### Request Body
/// ```json
/// { "essay": "Revised text..." }
/// ```
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// { "message": "Revised essay analyzed successfully!", "feedback": "..." }
/// ```
///
/// - `404 Not Found` (unknown or non-integer id; no feedback is requested)
/// ```json
/// { "error": "Original essay not found" }
/// ```
///
/// - `400 Bad Request` (known id, missing or empty `essay`)
/// ```json
/// { "error": "No essay provided" }
/// ```
pub async fn resubmit(
    State(state): State<AppState>,
    essay_id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<EssayRequest>, JsonRejection>,
) -> Result<Json<ResubmitResponse>, ApiError> {
    let Ok(Path(essay_id)) = essay_id else {
        return Err(ApiError::not_found(ESSAY_NOT_FOUND));
    };

    if EssayModel::find_essay_text(state.db(), essay_id)
        .await?
        .is_none()
    {
        return Err(ApiError::not_found(ESSAY_NOT_FOUND));
    }

    let revised = require_text(body_or_default(payload).essay, NO_ESSAY)?;
    let feedback = state.feedback().generate(&revised).await?;
    tracing::info!(essay_id, "Revised essay analyzed");

    Ok(Json(ResubmitResponse {
        message: RESUBMIT_MESSAGE,
        feedback,
    }))
}

/// POST /submit-essay
///
/// Legacy endpoint: proofreads an essay with a single-turn completion call. Nothing is
/// stored and no scores are produced.
///
/// ### Request Body
/// ```json
/// { "essay_text": "My essay..." }
/// ```
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// { "feedback": "Consider splitting the second paragraph..." }
/// ```
///
/// - `400 Bad Request`
/// ```json
/// { "error": "No essay text provided" }
/// ```
pub async fn submit_essay(
    State(state): State<AppState>,
    payload: Result<Json<EssayTextRequest>, JsonRejection>,
) -> Result<Json<FeedbackResponse>, ApiError> {
    let essay = require_text(body_or_default(payload).essay_text, NO_ESSAY_TEXT)?;

    let feedback = state.legacy_feedback().generate(&essay).await?;
    tracing::info!(strategy = state.legacy_feedback().name(), "Essay proofread");

    Ok(Json(FeedbackResponse { feedback }))
}

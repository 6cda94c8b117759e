use axum::{Json, extract::State};
use chrono::Utc;

use super::common::{MonthlyReportResponse, NO_SUBMISSIONS};
use crate::{response::ApiError, state::AppState};
use db::models::essay::Model as EssayModel;
use grader::report::MonthlyReport;

/// GET /monthly_report
///
/// Summarizes every submission from the trailing 30 days.
///
/// ### Responses
///
/// - `200 OK` (at least one submission)
/// ```json
/// {
///   "report": "Your monthly writing report:\n- Strengths: organization.\n...",
///   "averages": {
///     "clarity": 17.0, "argument": 18.0, "evidence": 16.0,
///     "organization": 19.0, "grammar": 15.0, "style": 16.0
///   }
/// }
/// ```
///
/// - `200 OK` (nothing submitted in the window)
/// ```json
/// { "message": "No essays submitted this month" }
/// ```
pub async fn monthly_report(
    State(state): State<AppState>,
) -> Result<Json<MonthlyReportResponse>, ApiError> {
    let scores = EssayModel::scores_in_report_window(state.db(), Utc::now()).await?;

    let response = match MonthlyReport::from_scores(&scores) {
        Some(report) => {
            tracing::debug!(
                submissions = report.submissions,
                strength = %report.strength,
                weakest = %report.weakest,
                "Monthly report built"
            );
            MonthlyReportResponse::Report {
                report: report.summary(),
                averages: report.averages,
            }
        }
        None => MonthlyReportResponse::Empty {
            message: NO_SUBMISSIONS,
        },
    };

    Ok(Json(response))
}

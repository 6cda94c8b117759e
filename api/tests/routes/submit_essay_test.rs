#[cfg(test)]
mod tests {
    use crate::helpers::app::{StubFeedback, make_test_app, make_test_app_with};
    use axum::http::StatusCode;
    use db::models::Essay;
    use grader::error::GraderError;
    use sea_orm::{EntityTrait, PaginatorTrait};

    #[tokio::test]
    async fn submit_essay_uses_legacy_strategy_and_stores_nothing() {
        let app = make_test_app().await;

        let (status, json) = app
            .post_json("/submit-essay", r#"{"essay_text":"Their going to the park."}"#)
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["feedback"], "Fix the comma splices.");
        assert_eq!(app.legacy.calls(), 1);
        assert_eq!(app.feedback.calls(), 0);
        assert_eq!(Essay::find().count(&app.db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn submit_essay_requires_essay_text_field() {
        let app = make_test_app().await;

        for body in ["{}", r#"{"essay":"wrong field"}"#, r#"{"essay_text":""}"#] {
            let (status, json) = app.post_json("/submit-essay", body).await;

            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(json["error"], "No essay text provided");
        }
        assert_eq!(app.legacy.calls(), 0);
    }

    #[tokio::test]
    async fn submit_essay_maps_authentication_failure() {
        let app = make_test_app_with(
            StubFeedback::replying("unused"),
            StubFeedback::failing(GraderError::Authentication("OPENAI_API_KEY is not set".into())),
        )
        .await;

        let (status, json) = app
            .post_json("/submit-essay", r#"{"essay_text":"text"}"#)
            .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(json["kind"], "upstream_authentication");
    }
}

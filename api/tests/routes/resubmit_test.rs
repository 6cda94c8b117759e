#[cfg(test)]
mod tests {
    use crate::helpers::app::{StubFeedback, make_test_app, make_test_app_with};
    use axum::http::StatusCode;
    use db::models::{Essay, essay::Model as EssayModel};
    use grader::{error::GraderError, scorer::PLACEHOLDER_SCORES};
    use sea_orm::{EntityTrait, PaginatorTrait};

    #[tokio::test]
    async fn resubmit_unknown_id_is_not_found_without_outbound_call() {
        let app = make_test_app().await;

        let (status, json) = app
            .post_json("/resubmit/999999", r#"{"essay":"revised"}"#)
            .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "Original essay not found");
        assert_eq!(app.feedback.calls(), 0);
    }

    #[tokio::test]
    async fn resubmit_non_integer_id_is_not_found() {
        let app = make_test_app().await;

        let (status, json) = app
            .post_json("/resubmit/first", r#"{"essay":"revised"}"#)
            .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "Original essay not found");
        assert_eq!(app.feedback.calls(), 0);
    }

    #[tokio::test]
    async fn resubmit_finds_essay_created_by_analyze() {
        let app = make_test_app().await;
        let (_, created) = app.post_json("/analyze", r#"{"essay":"draft"}"#).await;
        let id = created["id"].as_i64().unwrap();

        let (status, json) = app
            .post_json(&format!("/resubmit/{id}"), r#"{"essay":"final draft"}"#)
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Revised essay analyzed successfully!");
        assert_eq!(json["feedback"], "Clear thesis, weak evidence.");
        assert_eq!(app.feedback.calls(), 2);
    }

    #[tokio::test]
    async fn resubmit_does_not_store_or_modify_rows() {
        let app = make_test_app().await;
        let original = EssayModel::create(&app.db, "draft", "first pass", &PLACEHOLDER_SCORES)
            .await
            .unwrap();

        let (status, _) = app
            .post_json(
                &format!("/resubmit/{}", original.id),
                r#"{"essay":"rewritten"}"#,
            )
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(Essay::find().count(&app.db).await.unwrap(), 1);
        let reloaded = Essay::find_by_id(original.id)
            .one(&app.db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(reloaded.essay, "draft");
        assert_eq!(reloaded.feedback, "first pass");
    }

    #[tokio::test]
    async fn resubmit_known_id_without_essay_is_bad_request() {
        let app = make_test_app().await;
        let original = EssayModel::create(&app.db, "draft", "fb", &PLACEHOLDER_SCORES)
            .await
            .unwrap();

        let (status, json) = app
            .post_json(&format!("/resubmit/{}", original.id), "{}")
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "No essay provided");
        assert_eq!(app.feedback.calls(), 0);
    }

    #[tokio::test]
    async fn resubmit_maps_upstream_outage() {
        let app = make_test_app_with(
            StubFeedback::failing(GraderError::UpstreamUnavailable("timed out".into())),
            StubFeedback::replying("unused"),
        )
        .await;
        let original = EssayModel::create(&app.db, "draft", "fb", &PLACEHOLDER_SCORES)
            .await
            .unwrap();

        let (status, json) = app
            .post_json(&format!("/resubmit/{}", original.id), r#"{"essay":"again"}"#)
            .await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json["kind"], "upstream_unavailable");
    }
}

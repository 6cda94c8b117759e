#[cfg(test)]
mod tests {
    use crate::helpers::app::make_test_app;
    use axum::http::StatusCode;
    use chrono::{Duration, Utc};
    use db::models::essay::Model as EssayModel;
    use grader::types::Scores;

    #[tokio::test]
    async fn empty_store_reports_no_submissions() {
        let app = make_test_app().await;

        let (status, json) = app.get("/monthly_report").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "No essays submitted this month");
        assert!(json.get("report").is_none());
    }

    #[tokio::test]
    async fn uniform_scores_tie_on_first_category() {
        let app = make_test_app().await;
        EssayModel::create(&app.db, "even", "fb", &Scores::uniform(10))
            .await
            .unwrap();

        let (status, json) = app.get("/monthly_report").await;

        assert_eq!(status, StatusCode::OK);
        for category in ["clarity", "argument", "evidence", "organization", "grammar", "style"] {
            assert_eq!(json["averages"][category], 10.0);
        }
        let report = json["report"].as_str().unwrap();
        assert!(report.contains("- Strengths: clarity."));
        assert!(report.contains("- Weakest area: clarity."));
    }

    #[tokio::test]
    async fn report_after_analyze_uses_placeholder_extremes() {
        let app = make_test_app().await;
        app.post_json("/analyze", r#"{"essay":"first"}"#).await;
        app.post_json("/analyze", r#"{"essay":"second"}"#).await;

        let (status, json) = app.get("/monthly_report").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["averages"]["organization"], 19.0);
        assert_eq!(json["averages"]["grammar"], 15.0);
        assert_eq!(
            json["report"],
            "Your monthly writing report:\n\
             - Strengths: organization.\n\
             - Weakest area: grammar.\n\
             - Suggestions: Focus on improving grammar by doing more structured outlines before writing.\n"
        );
    }

    #[tokio::test]
    async fn submissions_outside_window_are_ignored() {
        let app = make_test_app().await;
        let long_ago = Utc::now() - Duration::days(45);
        EssayModel::create_at(&app.db, "stale", "fb", &Scores::uniform(3), long_ago)
            .await
            .unwrap();

        let (_, json) = app.get("/monthly_report").await;
        assert_eq!(json["message"], "No essays submitted this month");

        EssayModel::create(&app.db, "fresh", "fb", &Scores::uniform(8))
            .await
            .unwrap();

        let (_, json) = app.get("/monthly_report").await;
        assert_eq!(json["averages"]["style"], 8.0);
    }

    #[tokio::test]
    async fn averages_are_arithmetic_means() {
        let app = make_test_app().await;
        let low = Scores {
            clarity: 10,
            argument: 12,
            evidence: 14,
            organization: 16,
            grammar: 18,
            style: 20,
        };
        let high = Scores {
            clarity: 11,
            argument: 12,
            evidence: 14,
            organization: 16,
            grammar: 18,
            style: 2,
        };
        EssayModel::create(&app.db, "a", "fb", &low).await.unwrap();
        EssayModel::create(&app.db, "b", "fb", &high).await.unwrap();

        let (_, json) = app.get("/monthly_report").await;

        assert_eq!(json["averages"]["clarity"], 10.5);
        assert_eq!(json["averages"]["style"], 11.0);
        let report = json["report"].as_str().unwrap();
        assert!(report.contains("- Strengths: grammar."));
        assert!(report.contains("- Weakest area: clarity."));
    }
}

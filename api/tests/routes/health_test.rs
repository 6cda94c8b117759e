#[cfg(test)]
mod tests {
    use crate::helpers::app::make_test_app;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn home_reports_service_running() {
        let app = make_test_app().await;

        let (status, json) = app.get("/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Essay Writing Teacher Plugin is running!");
    }

    #[tokio::test]
    async fn home_is_idempotent() {
        let app = make_test_app().await;

        let first = app.get("/").await;
        let second = app.get("/").await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let app = make_test_app().await;

        let (status, _) = app.get("/does-not-exist").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

#[cfg(test)]
mod tests {
    use crate::helpers::app::make_test_app;
    use tower::ServiceExt;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };

    #[tokio::test]
    async fn preflight_allows_any_origin() {
        let app = make_test_app().await;
        let req = Request::builder()
            .method("OPTIONS")
            .uri("/analyze")
            .header("origin", "http://example.com")
            .header("access-control-request-method", "POST")
            .header("access-control-request-headers", "content-type")
            .body(Body::empty())
            .unwrap();

        let response = app.router.clone().oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers["access-control-allow-origin"], "http://example.com");
        assert!(
            headers["access-control-allow-methods"]
                .to_str()
                .unwrap()
                .contains("POST")
        );
    }

    #[tokio::test]
    async fn simple_request_carries_cors_headers() {
        let app = make_test_app().await;
        let req = Request::builder()
            .method("GET")
            .uri("/monthly_report")
            .header("origin", "http://example.com")
            .body(Body::empty())
            .unwrap();

        let response = app.router.clone().oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers["access-control-allow-origin"], "http://example.com");
        assert_eq!(headers["access-control-expose-headers"], "content-type");
    }
}

#[cfg(test)]
mod tests {
    use crate::helpers::upstream::{fake_openai, rate_limited_openai, spawn_upstream};
    use api::{app, state::AppState};
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use db::{models::Essay, test_utils::setup_test_db};
    use sea_orm::{EntityTrait, PaginatorTrait};
    use serde_json::Value;
    use serial_test::serial;
    use tower::ServiceExt;
    use util::config::AppConfig;

    async fn post(router: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = router.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn point_at(base_url: &str, key: &str) {
        AppConfig::set_openai_base_url(base_url);
        AppConfig::set_openai_api_key(key);
        AppConfig::set_openai_chat_model("gpt-4");
        AppConfig::set_openai_completion_model("gpt-3.5-turbo-instruct");
        AppConfig::set_openai_timeout_secs(5);
    }

    #[tokio::test]
    #[serial]
    async fn configured_strategies_talk_to_openai_endpoints() {
        let base = spawn_upstream(fake_openai("sk-test")).await;
        point_at(&base, "sk-test");
        let db = setup_test_db().await;
        let router = app(AppState::from_config(db.clone()).unwrap());

        let (status, json) = post(&router, "/analyze", r#"{"essay":"An essay."}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["feedback"], "chat feedback from gpt-4");
        assert_eq!(Essay::find().count(&db).await.unwrap(), 1);

        let (status, json) = post(&router, "/submit-essay", r#"{"essay_text":"An essay."}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["feedback"], "proofread feedback");

        AppConfig::reset();
    }

    #[tokio::test]
    #[serial]
    async fn rejected_key_surfaces_as_authentication_error() {
        let base = spawn_upstream(fake_openai("sk-test")).await;
        point_at(&base, "sk-wrong");
        let db = setup_test_db().await;
        let router = app(AppState::from_config(db.clone()).unwrap());

        let (status, json) = post(&router, "/analyze", r#"{"essay":"An essay."}"#).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(json["kind"], "upstream_authentication");
        assert!(
            json["error"]
                .as_str()
                .unwrap()
                .contains("Incorrect API key provided")
        );
        assert_eq!(Essay::find().count(&db).await.unwrap(), 0);

        AppConfig::reset();
    }

    #[tokio::test]
    #[serial]
    async fn upstream_rate_limit_is_distinguishable() {
        let base = spawn_upstream(rate_limited_openai()).await;
        point_at(&base, "sk-test");
        let router = app(AppState::from_config(setup_test_db().await).unwrap());

        let (status, json) = post(&router, "/analyze", r#"{"essay":"An essay."}"#).await;

        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(json["kind"], "upstream_rate_limited");

        AppConfig::reset();
    }

    #[tokio::test]
    #[serial]
    async fn missing_key_fails_without_contacting_upstream() {
        let base = spawn_upstream(fake_openai("sk-test")).await;
        point_at(&base, "");
        let router = app(AppState::from_config(setup_test_db().await).unwrap());

        let (status, json) = post(&router, "/submit-essay", r#"{"essay_text":"x"}"#).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(json["kind"], "upstream_authentication");

        AppConfig::reset();
    }
}

//! # OpenAI HTTP Client
//!
//! A thin wrapper around `reqwest` shared by every OpenAI-backed feedback strategy. It
//! owns the credential, the base URL and the request timeout, and it is the single place
//! where transport errors and HTTP statuses are classified into [`GraderError`]s:
//!
//! | Upstream outcome                         | Error                   |
//! |------------------------------------------|-------------------------|
//! | no API key configured                    | `Authentication`        |
//! | connect failure / timeout                | `UpstreamUnavailable`   |
//! | 401, 403                                 | `Authentication`        |
//! | 429                                      | `RateLimited`           |
//! | 5xx                                      | `UpstreamUnavailable`   |
//! | any other non-2xx, or an unparsable body | `MalformedResponse`     |

use crate::error::GraderError;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::time::Duration;
use util::config;

/// Error envelope the OpenAI API uses for non-2xx answers.
#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenAiClient {
    /// Creates a client for `base_url` (e.g. `https://api.openai.com/v1`).
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GraderError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                GraderError::UpstreamUnavailable(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Creates a client from `OPENAI_API_KEY`, `OPENAI_BASE_URL` and `OPENAI_TIMEOUT_SECS`.
    pub fn from_config() -> Result<Self, GraderError> {
        Self::new(
            config::openai_api_key(),
            config::openai_base_url(),
            Duration::from_secs(config::openai_timeout_secs()),
        )
    }

    /// POSTs `body` as JSON to `{base_url}{path}` and decodes the JSON answer.
    pub async fn post_json<Req, Resp>(&self, path: &str, body: &Req) -> Result<Resp, GraderError>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        if self.api_key.trim().is_empty() {
            return Err(GraderError::Authentication(
                "OPENAI_API_KEY is not set".to_string(),
            ));
        }

        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "Sending feedback request");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(classify_transport_error)?;

        if !status.is_success() {
            let err = classify_status(status, &text);
            tracing::warn!(%url, %status, error = %err, "Feedback request rejected upstream");
            return Err(err);
        }

        serde_json::from_str::<Resp>(&text).map_err(|e| {
            GraderError::MalformedResponse(format!(
                "error decoding response body: {}. Full response: {}",
                e, text
            ))
        })
    }
}

fn classify_transport_error(e: reqwest::Error) -> GraderError {
    if e.is_timeout() {
        GraderError::UpstreamUnavailable(format!("request timed out: {e}"))
    } else if e.is_decode() {
        GraderError::MalformedResponse(e.to_string())
    } else {
        GraderError::UpstreamUnavailable(e.to_string())
    }
}

fn classify_status(status: StatusCode, body: &str) -> GraderError {
    let detail = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|env| env.error.message)
        .unwrap_or_else(|_| format!("HTTP {status}"));

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GraderError::Authentication(detail),
        StatusCode::TOO_MANY_REQUESTS => GraderError::RateLimited(detail),
        s if s.is_server_error() => GraderError::UpstreamUnavailable(detail),
        _ => GraderError::MalformedResponse(format!("unexpected status {status}: {detail}")),
    }
}

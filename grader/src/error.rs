//! Grader Error Types
//!
//! [`GraderError`] classifies every way an outbound feedback call can fail. Each variant
//! maps to a distinct HTTP response in the API layer, so callers can tell "the model is
//! down" apart from "our key was rejected" or "slow down".

/// Represents all error types that can occur while generating feedback.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraderError {
    /// Connection failure, timeout, or a 5xx from the upstream API.
    #[error("feedback service unavailable: {0}")]
    UpstreamUnavailable(String),
    /// Missing API key, or the upstream rejected it (401/403).
    #[error("feedback service rejected the request credentials: {0}")]
    Authentication(String),
    /// The upstream answered 429.
    #[error("feedback service rate limit reached: {0}")]
    RateLimited(String),
    /// The upstream answered with something we cannot use.
    #[error("feedback service returned an unexpected response: {0}")]
    MalformedResponse(String),
}

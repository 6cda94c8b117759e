//!
//! # Feedback Trait
//!
//! This module defines the [`FeedbackGenerator`] trait, implemented by every strategy that
//! can produce written feedback for an essay. The API holds generators as
//! `Arc<dyn FeedbackGenerator>`, so the trait is object safe and `Send + Sync`.
//!

use crate::error::GraderError;
use async_trait::async_trait;

/// A pluggable source of essay feedback.
///
/// # Arguments
/// - `essay`: The raw essay text submitted by the client.
///
/// # Returns
/// - `Ok(String)`: The feedback text, as produced by the strategy.
/// - `Err(GraderError)`: If the feedback could not be produced.
#[async_trait]
pub trait FeedbackGenerator: Send + Sync {
    async fn generate(&self, essay: &str) -> Result<String, GraderError>;

    /// Short label used in log lines.
    fn name(&self) -> &'static str;
}

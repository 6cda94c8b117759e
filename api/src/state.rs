//! Application state container shared across Axum route handlers.
//!
//! Handlers receive it through Axum's `State<T>` extractor. Cloning is cheap: the
//! database handle is a pool and the strategies sit behind `Arc`s.

use grader::{
    error::GraderError,
    feedback::{
        chat_feedback::ChatFeedback, completion_feedback::CompletionFeedback,
        openai_client::OpenAiClient,
    },
    scorer::FixedScores,
    traits::{feedback::FeedbackGenerator, score_extractor::ScoreExtractor},
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use util::config;

/// Central application state shared across the server.
///
/// This includes:
/// - The SeaORM connection pool for the essay store.
/// - The primary feedback strategy used by `/analyze` and `/resubmit`.
/// - The legacy completion strategy used by `/submit-essay`.
/// - The score extractor applied to every analyzed essay.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    feedback: Arc<dyn FeedbackGenerator>,
    legacy_feedback: Arc<dyn FeedbackGenerator>,
    scorer: Arc<dyn ScoreExtractor>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        feedback: Arc<dyn FeedbackGenerator>,
        legacy_feedback: Arc<dyn FeedbackGenerator>,
        scorer: Arc<dyn ScoreExtractor>,
    ) -> Self {
        Self {
            db,
            feedback,
            legacy_feedback,
            scorer,
        }
    }

    /// Wires the OpenAI-backed strategies from configuration.
    ///
    /// Both strategies share one HTTP client. The API key is not validated here; a
    /// missing key is reported on the first outbound call.
    pub fn from_config(db: DatabaseConnection) -> Result<Self, GraderError> {
        let client = OpenAiClient::from_config()?;

        Ok(Self::new(
            db,
            Arc::new(ChatFeedback::new(client.clone(), config::openai_chat_model())),
            Arc::new(CompletionFeedback::new(
                client,
                config::openai_completion_model(),
            )),
            Arc::new(FixedScores::default()),
        ))
    }

    /// Returns a shared reference to the internal `DatabaseConnection`.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn feedback(&self) -> &dyn FeedbackGenerator {
        self.feedback.as_ref()
    }

    pub fn legacy_feedback(&self) -> &dyn FeedbackGenerator {
        self.legacy_feedback.as_ref()
    }

    pub fn scorer(&self) -> &dyn ScoreExtractor {
        self.scorer.as_ref()
    }
}

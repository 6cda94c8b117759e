//! # Completion Feedback Strategy
//!
//! The legacy single-prompt variant: the essay is embedded in a proofreading prompt,
//! sent to `POST /completions`, and the first choice's text is returned trimmed.

use crate::error::GraderError;
use crate::feedback::openai_client::OpenAiClient;
use crate::traits::feedback::FeedbackGenerator;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const MAX_TOKENS: u32 = 500;

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: String,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    text: String,
}

pub struct CompletionFeedback {
    client: OpenAiClient,
    model: String,
}

impl CompletionFeedback {
    pub fn new(client: OpenAiClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

pub fn proofread_prompt(essay: &str) -> String {
    format!("Proofread this essay and provide feedback: {essay}")
}

#[async_trait]
impl FeedbackGenerator for CompletionFeedback {
    async fn generate(&self, essay: &str) -> Result<String, GraderError> {
        let request = CompletionRequest {
            model: &self.model,
            prompt: proofread_prompt(essay),
            max_tokens: MAX_TOKENS,
        };

        let response: CompletionResponse = self.client.post_json("/completions", &request).await?;

        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.text.trim().to_string())
            .ok_or_else(|| {
                GraderError::MalformedResponse("response contained no choices".to_string())
            })
    }

    fn name(&self) -> &'static str {
        "completion"
    }
}

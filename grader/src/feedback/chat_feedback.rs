//! # Chat Feedback Strategy
//!
//! Sends the essay to `POST /chat/completions` with a fixed system instruction and
//! returns the first choice's message content verbatim.

use crate::error::GraderError;
use crate::feedback::openai_client::OpenAiClient;
use crate::traits::feedback::FeedbackGenerator;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// The instruction sent as the system message of every chat request.
pub const SYSTEM_INSTRUCTION: &str = "You are an essay writing teacher. Assess the essay based on clarity, argument, evidence, organization, grammar, and style.";

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

pub struct ChatFeedback {
    client: OpenAiClient,
    model: String,
}

impl ChatFeedback {
    pub fn new(client: OpenAiClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

#[async_trait]
impl FeedbackGenerator for ChatFeedback {
    async fn generate(&self, essay: &str) -> Result<String, GraderError> {
        let request = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_INSTRUCTION,
                },
                ChatMessage {
                    role: "user",
                    content: essay,
                },
            ],
        };

        let response: ChatResponse = self.client.post_json("/chat/completions", &request).await?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                GraderError::MalformedResponse("response contained no message content".to_string())
            })
    }

    fn name(&self) -> &'static str {
        "chat"
    }
}

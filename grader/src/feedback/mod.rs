//! # Feedback Strategies Module
//!
//! Implementations of [`FeedbackGenerator`](crate::traits::feedback::FeedbackGenerator).
//!
//! ## Available Strategies
//!
//! - [`chat_feedback`]: the primary strategy; a chat completion with a fixed teacher
//!   instruction as the system message and the essay as the user message.
//! - [`completion_feedback`]: the legacy single-prompt completion kept for the
//!   `/submit-essay` route.
//!
//! Both share one [`openai_client::OpenAiClient`], which owns transport and error
//! classification.

pub mod chat_feedback;
pub mod completion_feedback;
pub mod openai_client;

//! # Grader Library
//!
//! Everything the essay endpoints need that is not HTTP or SQL:
//!
//! - **Feedback**: the [`FeedbackGenerator`](traits::feedback::FeedbackGenerator) trait and
//!   its OpenAI-backed implementations (chat and legacy completion).
//! - **Scoring**: the [`ScoreExtractor`](traits::score_extractor::ScoreExtractor) trait and the
//!   placeholder [`FixedScores`](scorer::FixedScores) rubric.
//! - **Reports**: per-category averages and the strongest/weakest category over a set of
//!   stored scores.
//!
//! Upstream failures are reported through [`GraderError`](error::GraderError) so the API
//! layer can tell an unreachable model apart from a bad key or a rate limit.

pub mod error;
pub mod feedback;
pub mod report;
pub mod scorer;
pub mod traits;
pub mod types;

use crate::types::Scores;

/// Produces rubric scores for an essay.
///
/// Implementations receive the generated feedback as well, so a future scorer can
/// parse scores out of the model's answer instead of computing them from scratch.
pub trait ScoreExtractor: Send + Sync {
    fn extract(&self, essay: &str, feedback: &str) -> Scores;
}

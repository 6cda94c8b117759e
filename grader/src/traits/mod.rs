//!
//! Traits Module
//!
//! The two seams the HTTP layer depends on, so implementations can be swapped
//! without touching endpoint logic.
//!
//! - [`feedback`]: turns essay text into natural-language feedback.
//! - [`score_extractor`]: turns an essay (and its feedback) into rubric scores.

pub mod feedback;
pub mod score_extractor;

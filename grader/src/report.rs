//! # Monthly Report Module
//!
//! Aggregates stored [`Scores`] into a [`MonthlyReport`]: one arithmetic mean per category,
//! the strongest category (highest mean) and the weakest category (lowest mean).
//!
//! ## Tie-break
//!
//! When several categories share the highest or lowest mean, the one declared first in
//! [`Category::ALL`] wins. A store where every score is equal therefore reports
//! `clarity` as both the strength and the weakest area.
//!
//! ## Text Output Example
//!
//! ```text
//! Your monthly writing report:
//! - Strengths: organization.
//! - Weakest area: grammar.
//! - Suggestions: Focus on improving grammar by doing more structured outlines before writing.
//! ```

use crate::types::{Averages, Category, Scores};

/// Aggregate view over a non-empty set of submissions.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyReport {
    /// Number of submissions the averages were computed from.
    pub submissions: usize,
    pub averages: Averages,
    pub strength: Category,
    pub weakest: Category,
}

impl MonthlyReport {
    /// Builds a report from the given rows, or `None` when there are no rows.
    pub fn from_scores(rows: &[Scores]) -> Option<Self> {
        if rows.is_empty() {
            return None;
        }

        let n = rows.len() as f64;
        let mean = |category: Category| {
            rows.iter().map(|s| f64::from(s.get(category))).sum::<f64>() / n
        };

        let averages = Averages {
            clarity: mean(Category::Clarity),
            argument: mean(Category::Argument),
            evidence: mean(Category::Evidence),
            organization: mean(Category::Organization),
            grammar: mean(Category::Grammar),
            style: mean(Category::Style),
        };

        Some(Self {
            submissions: rows.len(),
            strength: pick(&averages, |candidate, best| candidate > best),
            weakest: pick(&averages, |candidate, best| candidate < best),
            averages,
        })
    }

    /// Renders the human-readable summary returned by the report endpoint.
    pub fn summary(&self) -> String {
        format!(
            "Your monthly writing report:\n\
             - Strengths: {strength}.\n\
             - Weakest area: {weakest}.\n\
             - Suggestions: Focus on improving {weakest} by doing more structured outlines before writing.\n",
            strength = self.strength,
            weakest = self.weakest,
        )
    }
}

/// Walks the categories in declaration order and keeps a candidate only when it
/// strictly beats the current pick, so earlier categories win ties.
fn pick(averages: &Averages, beats: impl Fn(f64, f64) -> bool) -> Category {
    let mut best = Category::ALL[0];
    for category in Category::ALL.into_iter().skip(1) {
        if beats(averages.get(category), averages.get(best)) {
            best = category;
        }
    }
    best
}

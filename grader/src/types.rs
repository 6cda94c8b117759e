//! # Types Module
//!
//! The six rubric categories and the score containers shared by the store, the
//! scorer and the monthly report.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six evaluation categories.
///
/// The declaration order is significant: it is the order scores are serialized in
/// and the tie-break order used when picking a strongest or weakest category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Clarity,
    Argument,
    Evidence,
    Organization,
    Grammar,
    Style,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 6] = [
        Category::Clarity,
        Category::Argument,
        Category::Evidence,
        Category::Organization,
        Category::Grammar,
        Category::Style,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Clarity => "clarity",
            Category::Argument => "argument",
            Category::Evidence => "evidence",
            Category::Organization => "organization",
            Category::Grammar => "grammar",
            Category::Style => "style",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The six integer sub-scores attached to one essay submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub clarity: i32,
    pub argument: i32,
    pub evidence: i32,
    pub organization: i32,
    pub grammar: i32,
    pub style: i32,
}

impl Scores {
    /// Every category set to `value`.
    pub fn uniform(value: i32) -> Self {
        Self {
            clarity: value,
            argument: value,
            evidence: value,
            organization: value,
            grammar: value,
            style: value,
        }
    }

    pub fn get(&self, category: Category) -> i32 {
        match category {
            Category::Clarity => self.clarity,
            Category::Argument => self.argument,
            Category::Evidence => self.evidence,
            Category::Organization => self.organization,
            Category::Grammar => self.grammar,
            Category::Style => self.style,
        }
    }
}

/// Per-category arithmetic means over a set of [`Scores`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Averages {
    pub clarity: f64,
    pub argument: f64,
    pub evidence: f64,
    pub organization: f64,
    pub grammar: f64,
    pub style: f64,
}

impl Averages {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Clarity => self.clarity,
            Category::Argument => self.argument,
            Category::Evidence => self.evidence,
            Category::Organization => self.organization,
            Category::Grammar => self.grammar,
            Category::Style => self.style,
        }
    }
}

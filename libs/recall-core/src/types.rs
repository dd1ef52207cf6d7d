//! Core types for answer scoring.

use serde::{Deserialize, Serialize};

/// Three-tier mastery verdict suggested after checking an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Wrong,
    Almost,
    Right,
}

impl Verdict {
    /// Map a composite score to a verdict. Thresholds are inclusive lower
    /// bounds: 0.9 for right, 0.7 for almost.
    pub fn from_composite(composite: f64) -> Self {
        if composite >= 0.9 {
            Self::Right
        } else if composite >= 0.7 {
            Self::Almost
        } else {
            Self::Wrong
        }
    }

    /// Get the verdict name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wrong => "wrong",
            Self::Almost => "almost",
            Self::Right => "right",
        }
    }
}

/// Tier for the lightweight word-overlap check path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickVerdict {
    Perfect,
    VeryClose,
    GettingThere,
    KeepTrying,
    VeryDifferent,
}

impl QuickVerdict {
    /// Map a word-overlap score to a tier. Exact matches score 1.0 and
    /// land on Perfect; the remaining bounds are 0.8, 0.5 and 0.3,
    /// inclusive.
    pub fn from_score(score: f64) -> Self {
        if score == 1.0 {
            Self::Perfect
        } else if score >= 0.8 {
            Self::VeryClose
        } else if score >= 0.5 {
            Self::GettingThere
        } else if score >= 0.3 {
            Self::KeepTrying
        } else {
            Self::VeryDifferent
        }
    }

    /// Feedback sentence shown to the user for this tier.
    pub fn feedback(&self) -> &'static str {
        match self {
            Self::Perfect => "Perfect match! Your answer is exactly correct.",
            Self::VeryClose => "Very close! Your answer captures the main points.",
            Self::GettingThere => {
                "Getting there! Your answer has some correct elements but needs improvement."
            }
            Self::KeepTrying => {
                "Keep trying! Your answer shows some understanding but needs significant work."
            }
            Self::VeryDifferent => {
                "Your answer is quite different from the expected one. Review the material and try again."
            }
        }
    }
}

/// Scorer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorerConfig {
    /// Maximum accepted answer length in chars. The edit-distance and
    /// phrase scans are quadratic, so input is capped at the boundary.
    pub max_answer_len: usize,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            max_answer_len: 10_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_boundaries_are_inclusive() {
        assert_eq!(Verdict::from_composite(1.0), Verdict::Right);
        assert_eq!(Verdict::from_composite(0.9), Verdict::Right);
        assert_eq!(Verdict::from_composite(0.8999), Verdict::Almost);
        assert_eq!(Verdict::from_composite(0.7), Verdict::Almost);
        assert_eq!(Verdict::from_composite(0.6999), Verdict::Wrong);
        assert_eq!(Verdict::from_composite(0.0), Verdict::Wrong);
    }

    #[test]
    fn quick_verdict_boundaries_are_inclusive() {
        assert_eq!(QuickVerdict::from_score(1.0), QuickVerdict::Perfect);
        assert_eq!(QuickVerdict::from_score(0.9), QuickVerdict::VeryClose);
        assert_eq!(QuickVerdict::from_score(0.8), QuickVerdict::VeryClose);
        assert_eq!(QuickVerdict::from_score(0.5), QuickVerdict::GettingThere);
        assert_eq!(QuickVerdict::from_score(0.3), QuickVerdict::KeepTrying);
        assert_eq!(QuickVerdict::from_score(0.29), QuickVerdict::VeryDifferent);
    }

    #[test]
    fn verdict_names() {
        assert_eq!(Verdict::Wrong.as_str(), "wrong");
        assert_eq!(Verdict::Almost.as_str(), "almost");
        assert_eq!(Verdict::Right.as_str(), "right");
    }
}

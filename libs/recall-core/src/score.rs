//! Weighted multi-metric answer scoring.
//!
//! [`Scorer::score`] is the canonical path: character similarity, token-set
//! overlap and structural similarity combined into one composite driving
//! the three-tier verdict. [`quick_check`] is the lighter word-overlap
//! path with its own tiers and feedback text.

use crate::distance::char_similarity;
use crate::error::{Result, ScoreError};
use crate::overlap::token_similarity;
use crate::structure::structural_similarity;
use crate::tokenize::tokenize;
use crate::types::{QuickVerdict, ScorerConfig, Verdict};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Composite weights. Fixed design choice, must sum to 1.0.
const CHAR_WEIGHT: f64 = 0.4;
const TOKEN_WEIGHT: f64 = 0.3;
const STRUCTURAL_WEIGHT: f64 = 0.3;

/// Result of scoring a typed answer against the correct answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Weighted composite score between 0.0 and 1.0.
    pub composite: f64,
    /// Suggested mastery verdict.
    pub verdict: Verdict,
    /// Character-level (edit distance) sub-score.
    pub char_score: f64,
    /// Token-set (Jaccard) sub-score.
    pub token_score: f64,
    /// Structural (phrase + position) sub-score.
    pub structural_score: f64,
}

impl ScoreReport {
    fn exact_match() -> Self {
        Self {
            composite: 1.0,
            verdict: Verdict::Right,
            char_score: 1.0,
            token_score: 1.0,
            structural_score: 1.0,
        }
    }
}

/// Answer scorer with a configurable input cap.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    config: ScorerConfig,
}

impl Scorer {
    pub fn new(config: ScorerConfig) -> Self {
        Self { config }
    }

    /// Score a typed answer against the correct answer.
    ///
    /// Trimmed, case-folded identical inputs short-circuit to a perfect
    /// report. Input longer than the configured cap is rejected outright;
    /// empty input is not an error.
    pub fn score(&self, typed: &str, correct: &str) -> Result<ScoreReport> {
        self.check_len(typed)?;
        self.check_len(correct)?;

        let typed_norm = typed.trim().to_lowercase();
        let correct_norm = correct.trim().to_lowercase();

        if typed_norm == correct_norm {
            tracing::debug!("exact match, short-circuiting to perfect score");
            return Ok(ScoreReport::exact_match());
        }

        let char_score = char_similarity(&typed_norm, &correct_norm);

        let typed_tokens = tokenize(&typed_norm);
        let correct_tokens = tokenize(&correct_norm);
        let token_score = token_similarity(&typed_tokens, &correct_tokens);
        let structural_score = structural_similarity(&typed_tokens, &correct_tokens);

        let composite = CHAR_WEIGHT * char_score
            + TOKEN_WEIGHT * token_score
            + STRUCTURAL_WEIGHT * structural_score;
        let verdict = Verdict::from_composite(composite);

        tracing::debug!(
            composite,
            char_score,
            token_score,
            structural_score,
            verdict = verdict.as_str(),
            "scored answer"
        );

        Ok(ScoreReport {
            composite,
            verdict,
            char_score,
            token_score,
            structural_score,
        })
    }

    fn check_len(&self, answer: &str) -> Result<()> {
        let len = answer.chars().count();
        if len > self.config.max_answer_len {
            return Err(ScoreError::AnswerTooLong {
                len,
                max: self.config.max_answer_len,
            });
        }
        Ok(())
    }
}

/// Score with the default configuration.
pub fn score_answers(typed: &str, correct: &str) -> Result<ScoreReport> {
    Scorer::default().score(typed, correct)
}

/// Result of the lightweight word-overlap check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickCheck {
    /// Word-set Jaccard score between 0.0 and 1.0.
    pub score: f64,
    /// Tier the score falls into.
    pub verdict: QuickVerdict,
    /// Feedback sentence for the tier.
    pub feedback: String,
    /// Pile-move suggestion.
    pub suggestion: String,
}

/// Lightweight answer check: word-set overlap only, no weighting.
///
/// Exact trimmed case-folded matches force the score to 1.0. Tier bounds
/// (0.8 / 0.5 / 0.3) are part of the observable contract.
pub fn quick_check(typed: &str, correct: &str) -> QuickCheck {
    let typed_norm = typed.trim().to_lowercase();
    let correct_norm = correct.trim().to_lowercase();

    let score = if typed_norm == correct_norm {
        1.0
    } else {
        let typed_words: HashSet<&str> = typed_norm.split_whitespace().collect();
        let correct_words: HashSet<&str> = correct_norm.split_whitespace().collect();
        let union = typed_words.union(&correct_words).count();
        if union == 0 {
            1.0
        } else {
            typed_words.intersection(&correct_words).count() as f64 / union as f64
        }
    };

    let verdict = QuickVerdict::from_score(score);
    let suggestion = if score < 0.8 {
        "Consider moving to the wrong or almost pile".to_string()
    } else {
        "Great! Move to the right or done pile".to_string()
    };

    tracing::debug!(score, verdict = ?verdict, "quick-checked answer");

    QuickCheck {
        score,
        verdict,
        feedback: verdict.feedback().to_string(),
        suggestion,
    }
}

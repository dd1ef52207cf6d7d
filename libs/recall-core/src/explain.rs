//! Human-readable difference reports between two answers.

use crate::tokenize::split_words;
use serde::{Deserialize, Serialize};

/// Structured word-level differences between a typed and a correct answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiffReport {
    /// Words in the correct answer that never appear in the typed one.
    pub missing: Vec<String>,
    /// Words in the typed answer that never appear in the correct one.
    pub extra: Vec<String>,
    /// Whether the shared words appear in a different order.
    pub reordered: bool,
}

impl DiffReport {
    /// True when no differencing rule found anything.
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty() && !self.reordered
    }

    fn empty() -> Self {
        Self {
            missing: Vec::new(),
            extra: Vec::new(),
            reordered: false,
        }
    }
}

/// Compute word-level differences.
///
/// Uses the coarse whitespace split, not the punctuation-stripping
/// tokenizer, so reported words look like what was typed. Membership tests
/// are set-style, not multiset-aware. Identical (trimmed, case-folded)
/// inputs short-circuit to the empty report.
pub fn diff_answers(typed: &str, correct: &str) -> DiffReport {
    if typed.trim().to_lowercase() == correct.trim().to_lowercase() {
        return DiffReport::empty();
    }

    let typed_words = split_words(typed);
    let correct_words = split_words(correct);

    let missing: Vec<String> = correct_words
        .iter()
        .filter(|w| !typed_words.contains(w))
        .cloned()
        .collect();
    let extra: Vec<String> = typed_words
        .iter()
        .filter(|w| !correct_words.contains(w))
        .cloned()
        .collect();

    // Shared words in typed order vs shared words in correct order.
    let typed_common: Vec<&String> = typed_words
        .iter()
        .filter(|w| correct_words.contains(w))
        .collect();
    let correct_common: Vec<&String> = correct_words
        .iter()
        .filter(|w| typed_words.contains(w))
        .collect();
    let reordered = typed_common != correct_common;

    DiffReport {
        missing,
        extra,
        reordered,
    }
}

/// Render a multi-line explanation of how the typed answer differs.
pub fn explain(typed: &str, correct: &str) -> String {
    let report = diff_answers(typed, correct);

    if report.is_empty() {
        if typed.trim().to_lowercase() == correct.trim().to_lowercase() {
            return "No differences found.".to_string();
        }
        // Every rule came up empty but the strings still differ; the
        // word-level diff is too coarse to say more.
        return "The answers are completely different.".to_string();
    }

    let mut lines = Vec::new();
    if !report.missing.is_empty() {
        lines.push(format!("Missing words: {}", report.missing.join(", ")));
    }
    if !report.extra.is_empty() {
        lines.push(format!("Extra words: {}", report.extra.join(", ")));
    }
    if report.reordered {
        lines.push("The words appear in a different order.".to_string());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn identical_answers_produce_empty_report() {
        let report = diff_answers("The cat sat", "The cat sat");
        assert!(report.missing.is_empty());
        assert!(report.extra.is_empty());
        assert!(!report.reordered);
        assert!(report.is_empty());
        assert_eq!(explain("The cat sat", "The cat sat"), "No differences found.");
    }

    #[test]
    fn case_differences_short_circuit_too() {
        let report = diff_answers("THE CAT SAT", "the cat sat");
        assert!(report.is_empty());
    }

    #[test]
    fn missing_words_are_reported() {
        let correct = "Quantum entanglement is a correlation between particles";
        let typed = "Entanglement is correlation between particles";
        let report = diff_answers(typed, correct);
        assert_eq!(report.missing, vec!["quantum", "a"]);
        assert!(report.extra.is_empty());

        let text = explain(typed, correct);
        assert!(text.contains("Missing words: quantum, a"));
    }

    #[test]
    fn extra_words_are_reported() {
        let report = diff_answers("the big red cat", "the cat");
        assert!(report.missing.is_empty());
        assert_eq!(report.extra, vec!["big", "red"]);
    }

    #[test]
    fn reordering_is_flagged() {
        let report = diff_answers("sat cat the", "the cat sat");
        assert!(report.missing.is_empty());
        assert!(report.extra.is_empty());
        assert!(report.reordered);
        assert_eq!(
            explain("sat cat the", "the cat sat"),
            "The words appear in a different order."
        );
    }

    #[test]
    fn fallback_when_no_rule_fires() {
        // Same word sequence, different raw strings (whitespace run): the
        // word-level rules all come up empty.
        let text = explain("the  cat", "the cat");
        assert_eq!(text, "The answers are completely different.");
    }

    #[test]
    fn membership_is_not_multiset_aware() {
        // "the" appears twice in the correct answer but once in the typed
        // answer; membership testing sees no missing word.
        let report = diff_answers("the cat sat on mat", "the cat sat on the mat");
        assert!(report.missing.is_empty());
        assert!(report.extra.is_empty());
    }

    #[test]
    fn combined_report_lists_every_difference() {
        let text = explain("b x a", "a b c");
        assert!(text.contains("Missing words: c"));
        assert!(text.contains("Extra words: x"));
        assert!(text.contains("different order"));
    }
}

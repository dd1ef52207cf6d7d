//! Token-set (Jaccard) similarity.

use std::collections::HashSet;

/// Jaccard similarity between two token sequences, treated as sets.
///
/// Duplicates collapse before the intersection/union counts. Two empty
/// sets are defined as identical (1.0); the division-by-zero branch is
/// explicit so the result is never NaN.
pub fn token_similarity(a: &[String], b: &[String]) -> f64 {
    let set_a: HashSet<&str> = a.iter().map(String::as_str).collect();
    let set_b: HashSet<&str> = b.iter().map(String::as_str).collect();

    if set_a.is_empty() && set_b.is_empty() {
        return 1.0;
    }

    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();

    intersection as f64 / union as f64
}

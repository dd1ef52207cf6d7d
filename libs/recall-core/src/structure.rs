//! Structural similarity: common phrases and positional agreement.

/// Length of the longest common contiguous token run.
///
/// Quadratic scan over start-index pairs with a linear extension; fine for
/// answers of tens of tokens, not for documents.
pub fn longest_common_run(a: &[String], b: &[String]) -> usize {
    let mut best = 0;

    for i in 0..a.len() {
        for j in 0..b.len() {
            let mut run = 0;
            while i + run < a.len() && j + run < b.len() && a[i + run] == b[j + run] {
                run += 1;
            }
            best = best.max(run);
        }
    }

    best
}

/// Position-wise token agreement in `[0, 1]`.
///
/// Full credit for a token matching at the same index, half credit when the
/// token occurs anywhere in the other sequence. Half credit ignores
/// multiplicity, so repeated filler words can over-credit; that behavior is
/// part of the contract.
pub fn position_agreement(a: &[String], b: &[String]) -> f64 {
    let max_len = a.len().max(b.len());
    if max_len == 0 {
        return 1.0;
    }

    let mut total = 0.0;
    for k in 0..max_len {
        match (a.get(k), b.get(k)) {
            (Some(ta), Some(tb)) if ta == tb => total += 1.0,
            (Some(ta), _) if b.contains(ta) => total += 0.5,
            _ => {}
        }
    }

    total / max_len as f64
}

/// Structural similarity: mean of the normalized longest common run and
/// the positional agreement. Two empty sequences are defined as identical.
pub fn structural_similarity(a: &[String], b: &[String]) -> f64 {
    let max_len = a.len().max(b.len());
    if max_len == 0 {
        return 1.0;
    }

    let run_score = longest_common_run(a, b) as f64 / max_len as f64;
    (run_score + position_agreement(a, b)) / 2.0
}

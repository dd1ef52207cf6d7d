//! Error types for recall-core.

use thiserror::Error;

/// Result type alias using ScoreError.
pub type Result<T> = std::result::Result<T, ScoreError>;

/// Errors that can occur when scoring an answer.
#[derive(Debug, Error)]
pub enum ScoreError {
    /// An input exceeded the configured length cap. The scorers run
    /// quadratic (and worse) scans, so oversized input is rejected at the
    /// boundary instead of silently accepted.
    #[error("answer of {len} chars exceeds the {max} char limit")]
    AnswerTooLong { len: usize, max: usize },
}

//! Answer-similarity scoring core for flashcard study.
//!
//! Provides:
//! - Tokenization of free-text answers
//! - Character-level similarity (Levenshtein distance)
//! - Token-set (Jaccard) and structural (phrase/position) similarity
//! - A weighted composite score with a three-tier verdict, plus a
//!   lightweight word-overlap check path
//! - Word-level difference reports
//! - Pile suggestions (wrong/almost/right/done)
//!
//! Everything here is pure computation over in-memory strings: no I/O, no
//! persistence, no UI. Card and pile storage are the caller's concern.

pub mod distance;
pub mod error;
pub mod explain;
pub mod overlap;
pub mod pile;
pub mod score;
pub mod structure;
pub mod tokenize;
pub mod types;

pub use distance::{char_similarity, levenshtein};
pub use error::{Result, ScoreError};
pub use explain::{diff_answers, explain, DiffReport};
pub use overlap::token_similarity;
pub use pile::Pile;
pub use score::{quick_check, score_answers, QuickCheck, ScoreReport, Scorer};
pub use structure::{longest_common_run, position_agreement, structural_similarity};
pub use tokenize::{split_words, tokenize};
pub use types::{QuickVerdict, ScorerConfig, Verdict};

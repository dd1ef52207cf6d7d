//! Mastery piles and verdict-to-pile suggestions.
//!
//! Piles mirror the study workflow: cards start unstudied and move between
//! wrong, almost and right as answers are checked, graduating to done.
//! This module only suggests moves; persisting them is the caller's job.

use crate::types::Verdict;
use serde::{Deserialize, Serialize};

/// Bucket a card sits in by self-assessed mastery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pile {
    Unstudied,
    Wrong,
    Almost,
    Right,
    Done,
}

impl Default for Pile {
    fn default() -> Self {
        Self::Unstudied
    }
}

impl Pile {
    /// Get the pile name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unstudied => "unstudied",
            Self::Wrong => "wrong",
            Self::Almost => "almost",
            Self::Right => "right",
            Self::Done => "done",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "unstudied" => Some(Self::Unstudied),
            "wrong" => Some(Self::Wrong),
            "almost" => Some(Self::Almost),
            "right" => Some(Self::Right),
            "done" => Some(Self::Done),
            _ => None,
        }
    }

    /// Next pile up the mastery ladder; Done stays Done.
    pub fn advance(self) -> Self {
        match self {
            Self::Unstudied => Self::Wrong,
            Self::Wrong => Self::Almost,
            Self::Almost => Self::Right,
            Self::Right => Self::Done,
            Self::Done => Self::Done,
        }
    }
}

impl Verdict {
    /// Pile a card should move to after this verdict.
    pub fn suggested_pile(self) -> Pile {
        match self {
            Self::Wrong => Pile::Wrong,
            Self::Almost => Pile::Almost,
            Self::Right => Pile::Right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdicts_map_to_matching_piles() {
        assert_eq!(Verdict::Wrong.suggested_pile(), Pile::Wrong);
        assert_eq!(Verdict::Almost.suggested_pile(), Pile::Almost);
        assert_eq!(Verdict::Right.suggested_pile(), Pile::Right);
    }

    #[test]
    fn advance_climbs_the_ladder_and_stops_at_done() {
        assert_eq!(Pile::Unstudied.advance(), Pile::Wrong);
        assert_eq!(Pile::Right.advance(), Pile::Done);
        assert_eq!(Pile::Done.advance(), Pile::Done);
    }

    #[test]
    fn round_trips_through_strings() {
        for pile in [
            Pile::Unstudied,
            Pile::Wrong,
            Pile::Almost,
            Pile::Right,
            Pile::Done,
        ] {
            assert_eq!(Pile::from_str(pile.as_str()), Some(pile));
        }
        assert_eq!(Pile::from_str("nonsense"), None);
    }
}

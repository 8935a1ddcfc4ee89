//! Investigation mechanics
//!
//! Weighs the collected clues against an accusation.

use crate::data::{ClueStore, SuspectIndex};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Clues that must point at the accused for the case to hold
pub const CORROBORATION_THRESHOLD: usize = 2;

/// Result of naming a culprit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Nothing was collected, so nobody can be accused
    NoEvidence,
    /// Enough clues point at the accused
    Guilty { corroboration: usize },
    /// Too few clues point at the accused
    NotProven { corroboration: usize },
}

impl Verdict {
    pub fn is_success(&self) -> bool {
        matches!(self, Verdict::Guilty { .. })
    }

    /// Clues that matched the accused; `None` when there was no evidence at all
    pub fn corroboration(&self) -> Option<usize> {
        match self {
            Verdict::NoEvidence => None,
            Verdict::Guilty { corroboration } | Verdict::NotProven { corroboration } => {
                Some(*corroboration)
            }
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::NoEvidence => write!(f, "No clues were collected. You cannot accuse anyone."),
            Verdict::Guilty { corroboration } => write!(
                f,
                "Case closed! {corroboration} clues confirm the accusation."
            ),
            Verdict::NotProven { corroboration } => write!(
                f,
                "Not enough evidence: only {corroboration} clue(s) support the accusation."
            ),
        }
    }
}

/// Decides accusations against a fixed threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccusationJudge {
    threshold: usize,
}

impl AccusationJudge {
    pub fn new() -> Self {
        Self {
            threshold: CORROBORATION_THRESHOLD,
        }
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Count the collected clues whose suspect is exactly `accused`
    pub fn verdict(&self, accused: &str, clues: &ClueStore, suspects: &SuspectIndex) -> Verdict {
        if clues.is_empty() {
            return Verdict::NoEvidence;
        }

        let corroboration = clues
            .iter()
            .filter(|clue| suspects.lookup(clue) == Some(accused))
            .count();

        if corroboration >= self.threshold {
            Verdict::Guilty { corroboration }
        } else {
            Verdict::NotProven { corroboration }
        }
    }
}

impl Default for AccusationJudge {
    fn default() -> Self {
        Self::new()
    }
}

/// How many collected clues point at each suspect
pub fn tally<'a>(clues: &'a ClueStore, suspects: &'a SuspectIndex) -> BTreeMap<&'a str, usize> {
    let mut counts = BTreeMap::new();
    for clue in clues {
        if let Some(suspect) = suspects.lookup(clue) {
            *counts.entry(suspect).or_insert(0) += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evidence(clues: &[&str]) -> ClueStore {
        let mut store = ClueStore::new();
        for clue in clues {
            store.insert(clue);
        }
        store
    }

    fn suspects() -> SuspectIndex {
        let mut index = SuspectIndex::new();
        index.insert("A", "X");
        index.insert("B", "X");
        index.insert("C", "Y");
        index
    }

    #[test]
    fn two_matching_clues_convict() {
        let verdict = AccusationJudge::new().verdict("X", &evidence(&["A", "B"]), &suspects());
        assert_eq!(verdict, Verdict::Guilty { corroboration: 2 });
        assert!(verdict.is_success());
    }

    #[test]
    fn one_matching_clue_is_not_enough() {
        let verdict = AccusationJudge::new().verdict("Y", &evidence(&["A", "C"]), &suspects());
        assert_eq!(verdict, Verdict::NotProven { corroboration: 1 });
        assert!(!verdict.is_success());
    }

    #[test]
    fn unknown_suspect_scores_zero() {
        let verdict = AccusationJudge::new().verdict("Z", &evidence(&["A", "B"]), &suspects());
        assert_eq!(verdict, Verdict::NotProven { corroboration: 0 });
    }

    #[test]
    fn names_match_exactly() {
        let judge = AccusationJudge::new();
        let clues = evidence(&["A", "B"]);
        assert_eq!(judge.verdict("x", &clues, &suspects()).corroboration(), Some(0));
        assert_eq!(judge.verdict("X ", &clues, &suspects()).corroboration(), Some(0));
    }

    #[test]
    fn clues_without_suspect_are_ignored() {
        let verdict = AccusationJudge::new().verdict("X", &evidence(&["A", "Q"]), &suspects());
        assert_eq!(verdict.corroboration(), Some(1));
    }

    #[test]
    fn empty_notebook_cannot_accuse() {
        let verdict = AccusationJudge::new().verdict("X", &ClueStore::new(), &SuspectIndex::new());
        assert_eq!(verdict, Verdict::NoEvidence);
        assert_eq!(verdict.corroboration(), None);
        assert!(!verdict.is_success());
    }

    #[test]
    fn tally_counts_per_suspect() {
        let store = evidence(&["A", "B", "C", "Q"]);
        let index = suspects();
        let counts = tally(&store, &index);
        assert_eq!(counts.get("X"), Some(&2));
        assert_eq!(counts.get("Y"), Some(&1));
        assert_eq!(counts.len(), 2);
    }
}

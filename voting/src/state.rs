use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Running vote counts for the current pair, keyed by candidate name.
pub type Tally = BTreeMap<String, u32>;

/// Application state threaded through the reducer.
///
/// Every field is optional so the serialized shape only carries what the
/// current phase uses: `{"entries": [...]}` once seeded, `{"vote": .., "entries": ..}`
/// while voting and `{"winner": ".."}` when the bracket is finished.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct State {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote: Option<Vote>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
}

/// The pairwise vote currently in progress.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vote {
    pub pair: [String; 2],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tally: Option<Tally>,
}

/// Coarse lifecycle position of a [`State`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Nothing seeded yet.
    Empty,
    /// Entries present, no pair under vote.
    Seeded,
    /// A pair is under vote but nobody has voted.
    Voting,
    /// A pair is under vote and the tally has at least one count.
    Tallying,
    /// A winner has been declared.
    Done,
}

impl State {
    pub fn phase(&self) -> Phase {
        if self.winner.is_some() {
            return Phase::Done;
        }
        match &self.vote {
            Some(vote) if vote.tally.is_some() => Phase::Tallying,
            Some(_) => Phase::Voting,
            None if self.entries.is_some() => Phase::Seeded,
            None => Phase::Empty,
        }
    }

    /// Entries still waiting to be paired (empty when the field is absent).
    pub fn pending(&self) -> &[String] {
        self.entries.as_deref().unwrap_or_default()
    }
}

impl Vote {
    /// Open a new vote on `pair` with no tally.
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            pair: [first.into(), second.into()],
            tally: None,
        }
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.pair.iter().any(|name| name == candidate)
    }

    /// Votes recorded for `candidate`, zero when the tally or key is missing.
    pub fn count(&self, candidate: &str) -> u32 {
        self.tally
            .as_ref()
            .and_then(|tally| tally.get(candidate))
            .copied()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{seeded, tallied, voting};

    #[test]
    fn phase_follows_present_fields() {
        assert_eq!(State::default().phase(), Phase::Empty);
        assert_eq!(seeded(&["A", "B"]).phase(), Phase::Seeded);
        assert_eq!(voting("A", "B", &[]).phase(), Phase::Voting);
        assert_eq!(
            tallied("A", "B", &[("A", 1)], &[]).phase(),
            Phase::Tallying
        );
        let done = State {
            winner: Some("A".to_string()),
            ..State::default()
        };
        assert_eq!(done.phase(), Phase::Done);
    }

    #[test]
    fn count_defaults_to_zero() {
        let vote = Vote::new("A", "B");
        assert_eq!(vote.count("A"), 0);

        let state = tallied("A", "B", &[("A", 3)], &[]);
        let vote = state.vote.expect("vote");
        assert_eq!(vote.count("A"), 3);
        assert_eq!(vote.count("B"), 0);
    }

    #[test]
    fn pending_treats_missing_entries_as_empty() {
        assert!(State::default().pending().is_empty());
        assert_eq!(seeded(&["A"]).pending(), ["A".to_string()]);
    }
}

//! Test-only helpers for constructing reducer states.

use crate::state::{State, Tally, Vote};

fn names(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|name| name.to_string()).collect()
}

/// State holding only `entries`.
pub fn seeded(entries: &[&str]) -> State {
    State {
        entries: Some(names(entries)),
        ..State::default()
    }
}

/// State with `first`/`second` under vote, no tally, and remaining `entries`.
pub fn voting(first: &str, second: &str, entries: &[&str]) -> State {
    State {
        vote: Some(Vote::new(first, second)),
        entries: Some(names(entries)),
        winner: None,
    }
}

/// Like [`voting`] but with an explicit tally.
pub fn tallied(first: &str, second: &str, counts: &[(&str, u32)], entries: &[&str]) -> State {
    let tally: Tally = counts
        .iter()
        .map(|(name, count)| (name.to_string(), *count))
        .collect();
    let mut state = voting(first, second, entries);
    if let Some(vote) = state.vote.as_mut() {
        vote.tally = Some(tally);
    }
    state
}

/// Terminal state naming `winner`.
pub fn decided(winner: &str) -> State {
    State {
        winner: Some(winner.to_string()),
        ..State::default()
    }
}

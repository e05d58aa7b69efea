//! Semantic invariants of a reducer state not expressible in its types.

use std::collections::HashSet;

use crate::state::State;

/// Check semantic invariants of `state`:
/// - `winner` never coexists with `vote` or `entries`
/// - the pair names two different candidates
/// - tally keys belong to the pair
/// - no candidate appears twice across the pair and `entries`
///
/// Returns stable error messages; empty means valid.
pub fn validate_invariants(state: &State) -> Vec<String> {
    let mut errors = Vec::new();

    if let Some(winner) = &state.winner {
        if state.vote.is_some() {
            errors.push(format!("winner '{}' set while a vote is in progress", winner));
        }
        if state.entries.is_some() {
            errors.push(format!("winner '{}' set while entries remain", winner));
        }
    }

    let mut seen = HashSet::new();
    if let Some(vote) = &state.vote {
        let [first, second] = &vote.pair;
        if first == second {
            errors.push(format!("pair names '{}' twice", first));
        }
        seen.insert(first.as_str());
        seen.insert(second.as_str());

        if let Some(tally) = &vote.tally {
            for name in tally.keys() {
                if !vote.contains(name) {
                    errors.push(format!("tally counts '{}' which is not in the pair", name));
                }
            }
        }
    }

    for entry in state.pending() {
        if !seen.insert(entry.as_str()) {
            errors.push(format!("duplicate candidate '{}' in entries", entry));
        }
    }

    errors
}

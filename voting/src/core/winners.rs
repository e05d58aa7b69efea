//! Survivors of a finished pairwise vote.

use crate::state::Vote;

/// Candidates from `vote` that return to the entry pool.
///
/// A strict majority keeps only the leader. Equal counts (including a vote
/// nobody took part in) keep both, in pair order. No vote, no survivors.
pub fn survivors(vote: Option<&Vote>) -> Vec<String> {
    let Some(vote) = vote else {
        return Vec::new();
    };
    let [first, second] = &vote.pair;
    let first_votes = vote.count(first);
    let second_votes = vote.count(second);

    if first_votes > second_votes {
        vec![first.clone()]
    } else if second_votes > first_votes {
        vec![second.clone()]
    } else {
        vec![first.clone(), second.clone()]
    }
}

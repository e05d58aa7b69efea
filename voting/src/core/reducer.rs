//! State transitions for the pairwise runoff.
//!
//! Each operation borrows the previous state and returns a new one; the
//! input is never modified. Precondition violations come back as
//! [`ReducerError`] rather than a half-formed state.

use tracing::{debug, instrument};

use crate::core::error::ReducerError;
use crate::core::types::ForeignVotePolicy;
use crate::core::winners::survivors;
use crate::state::{State, Vote};

/// Replace the entry pool with `entries`, keeping every other field.
pub fn set_entries<I, S>(state: &State, entries: I) -> State
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let entries: Vec<String> = entries.into_iter().map(Into::into).collect();
    debug!(count = entries.len(), "entries set");
    State {
        entries: Some(entries),
        ..state.clone()
    }
}

/// Close the current vote and open the next one.
///
/// Survivors of the current pair go to the back of the pool, behind the
/// entries that have not been voted on yet. The front two of the pool then
/// form the next pair. When only one candidate is left it becomes the
/// winner and `vote`/`entries` are dropped.
#[instrument(skip_all)]
pub fn next(state: &State) -> Result<State, ReducerError> {
    if let Some(winner) = &state.winner {
        return Err(ReducerError::AlreadyDecided {
            winner: winner.clone(),
        });
    }

    let carried = survivors(state.vote.as_ref());
    debug!(carried = carried.len(), "closing current vote");

    let mut pool = state.pending().iter().cloned().chain(carried);
    match (pool.next(), pool.next()) {
        (None, _) => Err(ReducerError::NotEnoughEntries { available: 0 }),
        (Some(winner), None) => {
            debug!(winner = %winner, "winner decided");
            Ok(State {
                winner: Some(winner),
                ..State::default()
            })
        }
        (Some(first), Some(second)) => {
            debug!(first = %first, second = %second, "next pair under vote");
            Ok(State {
                vote: Some(Vote::new(first, second)),
                entries: Some(pool.collect()),
                winner: None,
            })
        }
    }
}

/// Record one vote for `candidate`, rejecting names outside the pair.
pub fn vote(state: &State, candidate: &str) -> Result<State, ReducerError> {
    vote_with_policy(state, candidate, ForeignVotePolicy::Reject)
}

/// Record one vote for `candidate`, treating names outside the pair per `policy`.
pub fn vote_with_policy(
    state: &State,
    candidate: &str,
    policy: ForeignVotePolicy,
) -> Result<State, ReducerError> {
    let current = state.vote.as_ref().ok_or(ReducerError::NoActiveVote)?;

    if !current.contains(candidate) {
        return match policy {
            ForeignVotePolicy::Reject => Err(ReducerError::NotInPair {
                candidate: candidate.to_string(),
                pair: current.pair.clone(),
            }),
            ForeignVotePolicy::Ignore => {
                debug!(candidate, "ignoring vote outside current pair");
                Ok(state.clone())
            }
        };
    }

    let mut tally = current.tally.clone().unwrap_or_default();
    let count = tally.entry(candidate.to_string()).or_insert(0);
    *count = count.saturating_add(1);
    debug!(candidate, count = *count, "vote recorded");

    Ok(State {
        vote: Some(Vote {
            pair: current.pair.clone(),
            tally: Some(tally),
        }),
        ..state.clone()
    })
}

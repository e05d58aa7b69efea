//! Serializable reducer actions and their dispatch.

use serde::{Deserialize, Serialize};

use crate::core::error::ReducerError;
use crate::core::reducer::{next, set_entries, vote_with_policy};
use crate::io::config::ReducerConfig;
use crate::state::State;

/// A request to move the state forward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    SetEntries { entries: Vec<String> },
    Next,
    Vote { entry: String },
}

/// Apply `action` to `state`, returning the next state.
pub fn apply(state: &State, action: &Action, config: &ReducerConfig) -> Result<State, ReducerError> {
    match action {
        Action::SetEntries { entries } => Ok(set_entries(state, entries.iter().cloned())),
        Action::Next => next(state),
        Action::Vote { entry } => vote_with_policy(state, entry, config.foreign_vote),
    }
}

//! Shared deterministic types for reducer core logic.

use serde::{Deserialize, Serialize};

/// How `vote` treats a candidate that is not part of the current pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForeignVotePolicy {
    /// Return [`ReducerError::NotInPair`](crate::core::error::ReducerError::NotInPair).
    #[default]
    Reject,
    /// Leave the state unchanged.
    Ignore,
}

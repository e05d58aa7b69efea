//! Precondition violations reported by the reducer.

/// A transition was requested that the current state cannot satisfy.
///
/// The reducer never produces an invalid state; it returns one of these
/// instead and leaves the input untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReducerError {
    #[error("a winner has already been decided: {winner}")]
    AlreadyDecided { winner: String },

    #[error("not enough entries to continue: {available} available")]
    NotEnoughEntries { available: usize },

    #[error("no vote is in progress")]
    NoActiveVote,

    #[error("'{candidate}' is not part of the current pair [{}, {}]", .pair[0], .pair[1])]
    NotInPair { candidate: String, pair: [String; 2] },
}

//! Pairwise-elimination runoff reducer.
//!
//! Candidates are seeded into an entry pool, paired off two at a time and
//! voted on. The winner of each pair (or both, on a tie) goes to the back
//! of the pool until a single candidate is left. The crate is split the
//! same way throughout:
//!
//! - **[`core`]**: Pure, deterministic transitions (`set_entries`, `next`,
//!   `vote`) plus invariant checks. No I/O.
//! - **[`io`]**: Loading the reducer configuration from disk.
//!
//! States are plain values: every transition borrows the previous
//! [`State`] and returns a new one.

pub mod core;
pub mod io;
pub mod logging;
pub mod state;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use crate::core::action::{Action, apply};
pub use crate::core::error::ReducerError;
pub use crate::core::invariants::validate_invariants;
pub use crate::core::reducer::{next, set_entries, vote, vote_with_policy};
pub use crate::core::types::ForeignVotePolicy;
pub use crate::io::config::{ReducerConfig, load_config, write_config};
pub use crate::state::{Phase, State, Tally, Vote};

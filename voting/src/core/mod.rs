//! Deterministic, pure logic of the runoff reducer.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! states and return deterministic outputs suitable for tests.

pub mod action;
pub mod error;
pub mod invariants;
pub mod reducer;
pub mod types;
pub mod winners;

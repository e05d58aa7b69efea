//! I/O helpers around the reducer.

pub mod config;

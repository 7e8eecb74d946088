//! Command implementations for the `augur` binary.

pub mod ask;
pub mod session;

//! Replay saved fuzzer inputs through the `parsefuzz-core` adapter.
//!
//! Lets crash files and corpus entries be re-run without a fuzzing engine,
//! under the same demo crash configuration the fuzz target would use.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod inputs;
pub mod replay;

pub use error::ReplayError;
pub use inputs::collect_inputs;
pub use replay::{InputDigest, ReplayRecord, ReplaySummary, Replayer};

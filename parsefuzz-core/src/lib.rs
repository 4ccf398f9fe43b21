//! Input adapter for fuzzing a JSON parser.
//!
//! Each fuzzer-supplied input is copied into a null-terminated working
//! buffer, optionally checked for the demo crash marker, handed to a
//! [`JsonBackend`], and any parsed document is released before returning.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod backend;
pub mod buffer;
pub mod config;
pub mod error;
pub mod harness;
pub mod trigger;

pub use backend::{JsonBackend, SerdeJsonBackend};
pub use buffer::{WorkingBuffer, TERMINATOR};
pub use config::HarnessConfig;
pub use error::HarnessError;
pub use harness::{Harness, Outcome, Status};
pub use trigger::{FaultTrigger, CRASH_MARKER, DEMO_CRASH_ENV};

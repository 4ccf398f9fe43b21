//! The per-input adapter: copy, optional demo-crash check, parse, release.

use serde::{Deserialize, Serialize};

use crate::backend::{JsonBackend, SerdeJsonBackend};
use crate::buffer::WorkingBuffer;
use crate::config::HarnessConfig;
use crate::error::HarnessError;

/// Return code handed back to the fuzzing driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Status {
    /// Input processed; keep fuzzing.
    Continue,
}

impl Status {
    /// The raw integer the libFuzzer convention expects.
    #[must_use]
    pub const fn as_raw(self) -> i32 {
        match self {
            Status::Continue => 0,
        }
    }
}

/// What happened to one input. Informational only: every outcome maps to
/// [`Status::Continue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum Outcome {
    /// The working buffer could not be allocated; nothing was parsed.
    Skipped,
    /// The parser returned no document.
    Rejected,
    /// The parser returned a document, which was released.
    Parsed,
}

impl Outcome {
    /// Driver-facing status for this outcome.
    #[must_use]
    pub const fn status(self) -> Status {
        Status::Continue
    }
}

/// Feeds raw inputs to a [`JsonBackend`].
///
/// Holds no per-input state; every call to [`process`](Self::process) is
/// self-contained.
#[derive(Debug, Clone)]
pub struct Harness<B: JsonBackend> {
    backend: B,
    config: HarnessConfig,
}

impl Harness<SerdeJsonBackend> {
    /// `serde_json` backend with the demo crash disabled.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(SerdeJsonBackend::new(), HarnessConfig::default())
    }
}

impl<B: JsonBackend> Harness<B> {
    /// Create a harness over `backend`.
    #[must_use]
    pub fn new(backend: B, config: HarnessConfig) -> Self {
        Self { backend, config }
    }

    /// The configuration this harness was built with.
    #[must_use]
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// The wrapped backend.
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Run one input through the adapter.
    ///
    /// Aborts the process if the demo crash is enabled and `data` contains
    /// the marker.
    pub fn process(&self, data: &[u8]) -> Outcome {
        self.process_buffer(WorkingBuffer::copy_from(data))
    }

    /// Everything after the copy. A failed allocation ends the invocation
    /// without touching the parser.
    pub(crate) fn process_buffer(
        &self,
        buffer: Result<WorkingBuffer, HarnessError>,
    ) -> Outcome {
        let buffer = match buffer {
            Ok(b) => b,
            Err(e) => {
                tracing::debug!(error = %e, "skipping input");
                return Outcome::Skipped;
            }
        };

        self.config.fault_trigger.check(&buffer);

        match self.backend.parse(buffer.payload()) {
            Some(document) => {
                self.backend.release(document);
                Outcome::Parsed
            }
            None => Outcome::Rejected,
        }
    }

    /// libFuzzer-shaped entry point: process `data`, return `0`.
    pub fn test_one_input(&self, data: &[u8]) -> i32 {
        self.process(data).status().as_raw()
    }
}

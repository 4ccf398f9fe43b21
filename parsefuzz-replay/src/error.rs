//! Error types for the replay crate.

use std::path::PathBuf;

/// Errors that stop a replay run.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ReplayError {
    /// An input file could not be read.
    #[error("failed to read input {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A corpus directory could not be listed.
    #[error("failed to list directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The given paths contained no regular files.
    #[error("no inputs found")]
    NoInputs,

    /// The summary could not be encoded as JSON.
    #[error("failed to encode summary: {0}")]
    Report(#[from] serde_json::Error),
}

//! Seam between the input adapter and the JSON parsing library.

/// A JSON parsing library as seen by the adapter: one length-aware parse
/// call and one matching destructor.
///
/// `release` takes the document by value, so each parsed document can be
/// handed back at most once.
pub trait JsonBackend {
    /// The parsed object graph owned by the library.
    type Document;

    /// Parse exactly `payload`. Embedded NUL bytes are part of the input.
    ///
    /// `None` is an ordinary parse failure, not an error.
    fn parse(&self, payload: &[u8]) -> Option<Self::Document>;

    /// Release a document previously returned by [`parse`](Self::parse).
    fn release(&self, document: Self::Document);
}

/// Backend built on `serde_json`'s untyped [`serde_json::Value`].
#[derive(Debug, Clone, Copy, Default)]
#[non_exhaustive]
pub struct SerdeJsonBackend;

impl SerdeJsonBackend {
    /// Creates the backend.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl JsonBackend for SerdeJsonBackend {
    type Document = serde_json::Value;

    fn parse(&self, payload: &[u8]) -> Option<Self::Document> {
        match serde_json::from_slice::<serde_json::Value>(payload) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::trace!(error = %e, "parse rejected input");
                None
            }
        }
    }

    fn release(&self, document: Self::Document) {
        drop(document);
    }
}

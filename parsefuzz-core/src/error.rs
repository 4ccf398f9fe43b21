/// Errors produced by the `parsefuzz-core` crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum HarnessError {
    /// The working buffer for an input could not be allocated.
    #[error("failed to allocate a {requested}-byte working buffer")]
    Allocation { requested: usize },
}

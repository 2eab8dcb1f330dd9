//! Crate error types

use thiserror::Error;

/// Errors raised while constructing matchers
///
/// Searching itself is infallible: `find_elements` is a pure traversal
/// over an already-validated matcher set.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A matcher was constructed with an unusable argument, e.g. a bare
    /// string where a collection of names is required, or an empty tag
    /// collection. Not retryable; the call site must be fixed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

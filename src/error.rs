//! Error types for commerce-insights operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in commerce-insights operations.
///
/// The aggregation pipeline performs no I/O, so no transient or retryable
/// errors exist. Every computation either returns a valid result or fails
/// with one of the kinds below; the caller decides the display fallback.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A scalar insight (mean, mode) was requested over zero records.
    #[error("Empty input: cannot compute a summary over zero records")]
    EmptyInput,

    /// A record was assembled without one of its required fields.
    ///
    /// This indicates a contract violation by the loader collaborator and is
    /// surfaced immediately, never retried.
    #[error("Missing required field: {field}")]
    MissingField {
        /// Name of the absent field.
        field: &'static str,
    },
}

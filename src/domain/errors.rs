//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Network unreachable, request timeout, or non-success HTTP status.
    #[error("transport failure: {0}")]
    Transport(String),

    /// Success status but a body that does not match the result schema
    /// or violates its invariants.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Clipboard capability unavailable or denied.
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),

    /// Local file could not be read or sized.
    #[error("file access error: {0}")]
    File(String),

    /// Terminal prompt failed or was cancelled.
    #[error("UI error: {0}")]
    Ui(String),
}

use thiserror::Error;

/// Error type for token operations.
///
/// Validation failures are surfaced distinctly so the caller can decide
/// whether to prompt a re-login (`Expired`) or treat the token as an
/// attack signal (`InvalidSignature`). None of these is retried: a failed
/// token means the holder must authenticate again.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    /// Signature does not match the payload under the configured key and
    /// algorithm. Covers tampering, a wrong or rotated key, and tokens
    /// advertising any algorithm other than the pinned one.
    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is malformed: {0}")]
    MalformedToken(String),

    #[error("Token is expired")]
    Expired,

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),
}

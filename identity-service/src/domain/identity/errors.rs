use credentials::TokenError;
use thiserror::Error;

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for credential store operations.
///
/// The store is an external collaborator; its failures are infrastructure
/// failures, never security failures. An exceeded caller-supplied timeout
/// is reported as `Timeout` by the adapter.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Store query failed: {0}")]
    QueryFailed(String),

    #[error("Store call timed out: {0}")]
    Timeout(String),
}

impl From<anyhow::Error> for StoreError {
    fn from(err: anyhow::Error) -> Self {
        StoreError::QueryFailed(err.to_string())
    }
}

/// Top-level error for the identity flows.
#[derive(Debug, Clone, Error)]
pub enum IdentityError {
    // Caller input errors (recoverable by correcting the input)
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Business rule, surfaced to the caller
    #[error("Account already exists: {0}")]
    DuplicateAccount(String),

    /// Deliberately undifferentiated: covers both "no such account" and
    /// "wrong password" so callers cannot enumerate registered emails.
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// The stored hash for this account is not a valid encoding. A
    /// data-integrity failure for that record; never retried and never
    /// reported as an authentication failure.
    #[error("Stored credential is unreadable for this account")]
    CorruptCredential,

    // Token validation failures, surfaced distinctly
    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    // Infrastructure errors
    #[error("Credential store error: {0}")]
    Store(#[from] StoreError),

    #[error("Internal error: {0}")]
    Internal(String),
}

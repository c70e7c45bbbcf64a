use thiserror::Error;

/// Error type for password operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    /// Caller input error: an empty password is never hashed.
    #[error("Password must not be empty")]
    EmptyPassword,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// The stored hash is not a recognizable PHC encoding.
    ///
    /// This indicates corruption of stored data, not a bad password;
    /// a mismatching password is reported as `Ok(false)` by `verify`.
    #[error("Stored hash is not a valid encoding: {0}")]
    MalformedHash(String),
}

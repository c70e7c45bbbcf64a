use async_trait::async_trait;
use credentials::Claims;

use crate::domain::identity::errors::IdentityError;
use crate::domain::identity::errors::StoreError;
use crate::domain::identity::models::Credentials;
use crate::domain::identity::models::IssuedToken;
use crate::domain::identity::models::RegisterCommand;
use crate::domain::identity::models::UserRecord;

/// Persistence port for account records.
///
/// Implemented outside this core (database, cache, in-memory test double).
/// No transactional guarantees are assumed beyond atomic single-record
/// writes. Implementations should bound each call with the caller's
/// timeout policy and report an exceeded deadline as `StoreError::Timeout`.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Retrieve the record for a normalized email address.
    ///
    /// # Returns
    /// Optional record (None if no account exists for this email)
    ///
    /// # Errors
    /// * `QueryFailed` - Store operation failed
    /// * `Timeout` - Store call exceeded its deadline
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError>;

    /// Persist a new account record.
    ///
    /// # Returns
    /// The persisted record
    ///
    /// # Errors
    /// * `QueryFailed` - Store operation failed
    /// * `Timeout` - Store call exceeded its deadline
    async fn save(&self, record: UserRecord) -> Result<UserRecord, StoreError>;
}

/// Port exposed to the surrounding request layer.
///
/// The service behind it is stateless aside from the signing key (read-only
/// after startup), so one instance serves concurrent requests.
#[async_trait]
pub trait IdentityServicePort: Send + Sync + 'static {
    /// Register a new account.
    ///
    /// Hashes the password and persists exactly one record with the
    /// default role. No token is issued at registration.
    ///
    /// # Errors
    /// * `DuplicateAccount` - An account already exists for this email
    /// * `InvalidInput` - Empty password or blank display name
    /// * `Store` - Credential store failure
    async fn register(&self, command: RegisterCommand) -> Result<(), IdentityError>;

    /// Authenticate and issue a signed identity token.
    ///
    /// # Errors
    /// * `AuthenticationFailed` - Unknown email, wrong password, or
    ///   inactive account (indistinguishable by design)
    /// * `CorruptCredential` - Stored hash for the account is unreadable
    /// * `Store` - Credential store failure
    async fn login(&self, credentials: Credentials) -> Result<IssuedToken, IdentityError>;

    /// Validate a raw token and return the claims it asserts.
    ///
    /// # Errors
    /// * `Token(InvalidSignature)` - Tampered token or wrong key
    /// * `Token(MalformedToken)` - Structurally broken token
    /// * `Token(Expired)` - Token past its expiration instant
    fn validate_token(&self, token: &str) -> Result<Claims, IdentityError>;
}

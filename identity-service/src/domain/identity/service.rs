use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;
use chrono::Utc;
use credentials::Claims;
use credentials::PasswordError;
use credentials::PasswordHasher;
use credentials::TokenService;

use crate::config::TokenConfig;
use crate::domain::identity::errors::IdentityError;
use crate::domain::identity::models::Credentials;
use crate::domain::identity::models::IssuedToken;
use crate::domain::identity::models::RegisterCommand;
use crate::domain::identity::models::Role;
use crate::domain::identity::models::UserId;
use crate::domain::identity::models::UserRecord;
use crate::domain::identity::ports::CredentialStore;
use crate::domain::identity::ports::IdentityServicePort;

/// Syntactically valid argon2id encoding that matches no password.
/// Verified against when an email has no record, so a miss costs one full
/// Argon2 pass and is indistinguishable in timing from a wrong password.
const UNMATCHABLE_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$MDEyMzQ1Njc4OWFiY2RlZg$MDEyMzQ1Njc4OWFiY2RlZjAxMjM0NTY3ODlhYmNkZWY";

/// Identity flows: registration, login, token validation.
///
/// Takes the credential store as an explicit collaborator and composes the
/// password hasher and token service from `credentials`. Holds no mutable
/// state; the signing key is fixed at construction.
pub struct IdentityService<S>
where
    S: CredentialStore,
{
    store: Arc<S>,
    password_hasher: PasswordHasher,
    token_service: TokenService,
    token_ttl: Duration,
}

impl<S> IdentityService<S>
where
    S: CredentialStore,
{
    /// Create the identity service with injected dependencies.
    ///
    /// # Arguments
    /// * `store` - Credential store implementation
    /// * `config` - Signing key material and token lifetime
    pub fn new(store: Arc<S>, config: &TokenConfig) -> Self {
        Self {
            store,
            password_hasher: PasswordHasher::new(),
            token_service: TokenService::new(config.secret.as_bytes()),
            token_ttl: config.ttl(),
        }
    }
}

#[async_trait]
impl<S> IdentityServicePort for IdentityService<S>
where
    S: CredentialStore,
{
    async fn register(&self, command: RegisterCommand) -> Result<(), IdentityError> {
        if command.full_name.trim().is_empty() {
            return Err(IdentityError::InvalidInput(
                "full name must not be blank".to_string(),
            ));
        }

        if self
            .store
            .find_by_email(command.email.as_str())
            .await?
            .is_some()
        {
            tracing::debug!(email = %command.email, "registration rejected, email already in use");
            return Err(IdentityError::DuplicateAccount(
                command.email.as_str().to_string(),
            ));
        }

        let password_hash = self
            .password_hasher
            .hash(&command.password)
            .map_err(|e| match e {
                PasswordError::EmptyPassword => {
                    IdentityError::InvalidInput("password must not be empty".to_string())
                }
                other => IdentityError::Internal(format!("password hashing failed: {}", other)),
            })?;

        let record = UserRecord {
            id: UserId::new(),
            email: command.email,
            password_hash,
            full_name: command.full_name,
            role: Role::default(),
            active: true,
            created_at: Utc::now(),
        };

        let created = self.store.save(record).await?;
        tracing::debug!(user_id = %created.id, email = %created.email, "account registered");

        Ok(())
    }

    async fn login(&self, credentials: Credentials) -> Result<IssuedToken, IdentityError> {
        let record = self.store.find_by_email(credentials.email.as_str()).await?;

        let Some(record) = record else {
            // Burn a verification so unknown emails and wrong passwords
            // share a cost profile
            let _ = self
                .password_hasher
                .verify(&credentials.password, UNMATCHABLE_HASH);
            return Err(IdentityError::AuthenticationFailed);
        };

        let matched = self
            .password_hasher
            .verify(&credentials.password, &record.password_hash)
            .map_err(|e| match e {
                PasswordError::MalformedHash(_) => {
                    tracing::error!(
                        user_id = %record.id,
                        "stored password hash is not a valid encoding"
                    );
                    IdentityError::CorruptCredential
                }
                other => IdentityError::Internal(format!("password verification failed: {}", other)),
            })?;

        if !matched || !record.active {
            return Err(IdentityError::AuthenticationFailed);
        }

        let access_token = self
            .token_service
            .issue(record.email.as_str(), Utc::now(), self.token_ttl)?;
        tracing::debug!(user_id = %record.id, "login succeeded, token issued");

        Ok(IssuedToken { access_token })
    }

    fn validate_token(&self, token: &str) -> Result<Claims, IdentityError> {
        Ok(self.token_service.validate(token, Utc::now())?)
    }
}

mod common;

use std::sync::Arc;

use common::InMemoryCredentialStore;
use credentials::TokenError;
use identity_service::config::TokenConfig;
use identity_service::domain::identity::errors::IdentityError;
use identity_service::domain::identity::models::Credentials;
use identity_service::domain::identity::models::EmailAddress;
use identity_service::domain::identity::models::RegisterCommand;
use identity_service::domain::identity::ports::IdentityServicePort;
use identity_service::domain::identity::service::IdentityService;

const SECRET: &str = "integration_test_secret_32_bytes_ok!";

fn config(ttl_seconds: i64) -> TokenConfig {
    TokenConfig {
        secret: SECRET.to_string(),
        ttl_seconds,
    }
}

fn email(raw: &str) -> EmailAddress {
    EmailAddress::new(raw.to_string()).expect("invalid test email")
}

fn register_command(raw_email: &str, password: &str, full_name: &str) -> RegisterCommand {
    RegisterCommand::new(
        email(raw_email),
        password.to_string(),
        full_name.to_string(),
    )
}

#[tokio::test]
async fn test_register_login_validate_end_to_end() {
    let store = Arc::new(InMemoryCredentialStore::new());
    let service = IdentityService::new(store, &config(3600));

    service
        .register(register_command("a@x.com", "Secret123", "Ann"))
        .await
        .expect("Registration failed");

    let issued = service
        .login(Credentials::new(email("a@x.com"), "Secret123".to_string()))
        .await
        .expect("Login failed");

    let claims = service
        .validate_token(&issued.access_token)
        .expect("Token validation failed");
    assert_eq!(claims.subject(), "a@x.com");
}

#[tokio::test]
async fn test_token_is_expired_after_ttl_elapses() {
    let store = Arc::new(InMemoryCredentialStore::new());
    let service = IdentityService::new(store.clone(), &config(3600));

    service
        .register(register_command("a@x.com", "Secret123", "Ann"))
        .await
        .expect("Registration failed");

    // A zero TTL puts the expiration instant at issuance, so the token is
    // already past its lifetime by validation time
    let short_lived = IdentityService::new(store, &config(0));
    let issued = short_lived
        .login(Credentials::new(email("a@x.com"), "Secret123".to_string()))
        .await
        .expect("Login failed");

    let result = short_lived.validate_token(&issued.access_token);
    assert!(matches!(
        result,
        Err(IdentityError::Token(TokenError::Expired))
    ));
}

#[tokio::test]
async fn test_duplicate_registration_is_rejected() {
    let store = Arc::new(InMemoryCredentialStore::new());
    let service = IdentityService::new(store, &config(3600));

    service
        .register(register_command("a@x.com", "Secret123", "Ann"))
        .await
        .expect("First registration failed");

    let result = service
        .register(register_command("a@x.com", "Other456", "Ann Again"))
        .await;
    assert!(matches!(result, Err(IdentityError::DuplicateAccount(_))));
}

#[tokio::test]
async fn test_unknown_email_and_wrong_password_share_error_shape() {
    let store = Arc::new(InMemoryCredentialStore::new());
    let service = IdentityService::new(store, &config(3600));

    service
        .register(register_command("a@x.com", "Secret123", "Ann"))
        .await
        .expect("Registration failed");

    let unknown = service
        .login(Credentials::new(email("b@x.com"), "Secret123".to_string()))
        .await
        .unwrap_err();

    let wrong_password = service
        .login(Credentials::new(email("a@x.com"), "Wrong456".to_string()))
        .await
        .unwrap_err();

    assert!(matches!(unknown, IdentityError::AuthenticationFailed));
    assert!(matches!(wrong_password, IdentityError::AuthenticationFailed));
    assert_eq!(unknown.to_string(), wrong_password.to_string());
}

#[tokio::test]
async fn test_email_case_is_normalized_across_flows() {
    let store = Arc::new(InMemoryCredentialStore::new());
    let service = IdentityService::new(store, &config(3600));

    service
        .register(register_command("Ann@X.com", "Secret123", "Ann"))
        .await
        .expect("Registration failed");

    // Same account regardless of case at registration or login
    let result = service
        .register(register_command("ann@x.com", "Other456", "Imposter"))
        .await;
    assert!(matches!(result, Err(IdentityError::DuplicateAccount(_))));

    let issued = service
        .login(Credentials::new(email("ANN@X.COM"), "Secret123".to_string()))
        .await
        .expect("Login failed");

    let claims = service
        .validate_token(&issued.access_token)
        .expect("Token validation failed");
    assert_eq!(claims.subject(), "ann@x.com");
}

#[tokio::test]
async fn test_token_fails_validation_under_different_key() {
    let store = Arc::new(InMemoryCredentialStore::new());
    let service = IdentityService::new(store.clone(), &config(3600));

    service
        .register(register_command("a@x.com", "Secret123", "Ann"))
        .await
        .expect("Registration failed");

    let issued = service
        .login(Credentials::new(email("a@x.com"), "Secret123".to_string()))
        .await
        .expect("Login failed");

    let other_key = IdentityService::new(
        store,
        &TokenConfig {
            secret: "a_completely_different_32_byte_key!!".to_string(),
            ttl_seconds: 3600,
        },
    );

    let result = other_key.validate_token(&issued.access_token);
    assert!(matches!(
        result,
        Err(IdentityError::Token(TokenError::InvalidSignature))
    ));
}

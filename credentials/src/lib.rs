//! Credential verification and token lifecycle primitives
//!
//! Provides the two security-sensitive building blocks of the identity core:
//! - Password hashing and constant-time verification (Argon2id)
//! - Signed identity token issuance and validation (HS256)
//!
//! Both components are stateless after construction and safe for concurrent
//! reuse. The orchestration flows (register/login) live in the
//! `identity-service` crate and take these as explicit collaborators.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use credentials::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! assert!(!hasher.verify("not_my_password", &hash).unwrap());
//! ```
//!
//! ## Token Lifecycle
//! ```
//! use chrono::Duration;
//! use chrono::Utc;
//! use credentials::TokenService;
//!
//! let tokens = TokenService::new(b"an_hmac_secret_of_at_least_32_bytes!");
//! let now = Utc::now();
//!
//! let token = tokens
//!     .issue("ann@example.com", now, Duration::minutes(60))
//!     .unwrap();
//!
//! let claims = tokens.validate(&token, now).unwrap();
//! assert_eq!(claims.subject(), "ann@example.com");
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenService;

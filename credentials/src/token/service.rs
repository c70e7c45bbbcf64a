use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Issues and validates signed identity tokens.
///
/// The signing algorithm is pinned at construction (HS256); tokens whose
/// header advertises any other algorithm are rejected during validation,
/// so an attacker cannot downgrade to a weaker or unsigned scheme.
///
/// The service holds no mutable state and both operations take the clock
/// as an argument, so a single instance can be shared across concurrent
/// requests.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenService {
    /// Create a token service from the process-wide signing key.
    ///
    /// The same key must back issuance and validation; a token issued
    /// under one key fails validation under any other.
    ///
    /// # Arguments
    /// * `secret` - HMAC secret, at least 256 bits (32 bytes) for HS256
    ///
    /// # Security Notes
    /// - Load the secret from configuration at startup, never from source
    /// - The key is immutable for the lifetime of the service
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Issue a signed token asserting `subject` from `now` for `ttl`.
    ///
    /// The payload is `{sub, iat = now, exp = now + ttl}` and the
    /// signature covers all three fields.
    ///
    /// # Errors
    /// * `EncodingFailed` - Serialization or signing failed
    pub fn issue(
        &self,
        subject: &str,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        let claims = Claims::new(subject, now, ttl);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Validate a token and return its claims.
    ///
    /// The signature is verified before any decoded field is trusted:
    /// 1. signature mismatch, wrong key, or a non-pinned algorithm in the
    ///    header fails with `InvalidSignature`;
    /// 2. a structurally broken token fails with `MalformedToken`;
    /// 3. a token whose expiration instant has been reached fails with
    ///    `Expired`.
    ///
    /// Expiry is checked against the caller-supplied `now`, not the wall
    /// clock, so validation is deterministic.
    pub fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is enforced below against the caller's clock
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(map_decode_error)?;

        let claims = token_data.claims;
        if claims.is_expired(now) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    /// Extract the subject without verifying the signature.
    ///
    /// # Security Warning
    /// The returned value is unauthenticated. Use only for diagnostics
    /// and logging; authorization decisions must go through `validate`.
    pub fn extract_subject(&self, token: &str) -> Result<String, TokenError> {
        Ok(self.decode_unverified(token)?.sub)
    }

    /// Check expiry without verifying the signature.
    ///
    /// # Security Warning
    /// As with `extract_subject`, the answer comes from an unverified
    /// payload and must not gate authorization.
    pub fn is_expired(&self, token: &str, now: DateTime<Utc>) -> Result<bool, TokenError> {
        Ok(self.decode_unverified(token)?.is_expired(now))
    }

    fn decode_unverified(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(map_decode_error)?;

        Ok(token_data.claims)
    }
}

fn map_decode_error(e: jsonwebtoken::errors::Error) -> TokenError {
    match e.kind() {
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        // A header advertising a different algorithm is a downgrade
        // attempt, reported the same as a bad signature
        ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
            TokenError::InvalidSignature
        }
        _ => TokenError::MalformedToken(e.to_string()),
    }
}

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Identity token payload.
///
/// Immutable once issued: a new token is a new value. Carries only the
/// asserted identity and its validity window; never secrets or password
/// material. All three fields are covered by the token signature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (the authenticated account's email)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Build claims for a subject valid from `now` for `ttl`.
    pub fn new(subject: impl Into<String>, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            sub: subject.into(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }

    /// The identity asserted by this token.
    pub fn subject(&self) -> &str {
        &self.sub
    }

    /// Whether this token has expired as of `now`.
    ///
    /// A token is expired at its expiration instant, not one second after.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_new_sets_validity_window() {
        let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let claims = Claims::new("ann@example.com", now, Duration::hours(1));

        assert_eq!(claims.subject(), "ann@example.com");
        assert_eq!(claims.iat, 1_700_000_000);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_is_expired_boundary() {
        let issued = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let claims = Claims::new("ann@example.com", issued, Duration::seconds(60));

        assert!(!claims.is_expired(issued));
        assert!(!claims.is_expired(issued + Duration::seconds(59)));
        // Expired exactly at issuance + ttl
        assert!(claims.is_expired(issued + Duration::seconds(60)));
        assert!(claims.is_expired(issued + Duration::seconds(61)));
    }
}

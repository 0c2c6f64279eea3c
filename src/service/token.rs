//! Token Service
//!
//! Creation, validation and decoding of signed session tokens. The service
//! is stateless: every operation is a pure function of its inputs, the
//! shared signing secret and the current time, so it is safe to call from
//! any number of threads without synchronization.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;
use uuid::Uuid;

use crate::config::JwtConfig;
use crate::models::{AccessClaims, Claims, RefreshClaims};

/// Errors from token operations
#[derive(Error, Debug)]
pub enum TokenError {
    /// Token could not be signed
    #[error("Token generation failed: {0}")]
    Generation(String),

    /// Signature verification failed or the token is structurally malformed
    #[error("Invalid token: {0}")]
    Invalid(String),
}

/// Stateless issuer and verifier of session tokens
///
/// Access and refresh tokens are both HS256-signed with the same secret and
/// carry no type discriminator; they differ only in claim shape (access
/// tokens carry the email) and lifetime.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenService {
    /// Create a token service from raw key material and TTLs in milliseconds
    pub fn new(secret: &str, access_ttl_millis: i64, refresh_ttl_millis: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_ttl: Duration::milliseconds(access_ttl_millis),
            refresh_ttl: Duration::milliseconds(refresh_ttl_millis),
        }
    }

    /// Create a token service from application configuration
    pub fn from_config(config: &JwtConfig) -> Self {
        Self::new(
            &config.secret,
            config.access_ttl_millis,
            config.refresh_ttl_millis,
        )
    }

    /// Issue an access token carrying subject and email
    pub fn issue_access_token(&self, user_id: Uuid, email: &str) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = AccessClaims::new(user_id, email, now, now + self.access_ttl);

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Generation(e.to_string()))
    }

    /// Issue a refresh token carrying only the subject
    pub fn issue_refresh_token(&self, user_id: Uuid) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = RefreshClaims::new(user_id, now, now + self.refresh_ttl);

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Generation(e.to_string()))
    }

    /// Check that a token is well-formed, correctly signed and unexpired
    ///
    /// Any parse or signature failure yields `false`; this never errors.
    pub fn validate(&self, token: &str) -> bool {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation).is_ok()
    }

    /// Decode a token's claims after verifying its signature
    ///
    /// Expiry is not checked here: a well-signed but expired token still
    /// decodes, so callers can inspect `exp` and distinguish expired from
    /// forged.
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = false;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| TokenError::Invalid(e.to_string()))
    }

    /// Extract the subject (user id) from a verified token
    pub fn subject(&self, token: &str) -> Result<Uuid, TokenError> {
        let claims = self.decode(token)?;
        Uuid::parse_str(&claims.sub).map_err(|e| TokenError::Invalid(e.to_string()))
    }

    /// Extract the expiration instant from a verified token
    pub fn expiration(&self, token: &str) -> Result<DateTime<Utc>, TokenError> {
        let claims = self.decode(token)?;
        DateTime::from_timestamp(claims.exp, 0)
            .ok_or_else(|| TokenError::Invalid("expiration out of range".to_string()))
    }

    /// Check whether a token's expiration has passed
    ///
    /// Fail-closed: a token that cannot be decoded counts as expired.
    pub fn is_expired(&self, token: &str) -> bool {
        match self.decode(token) {
            Ok(claims) => claims.exp <= Utc::now().timestamp(),
            Err(_) => true,
        }
    }

    /// Configured access-token lifetime in seconds, for client display
    pub fn access_ttl_seconds(&self) -> i64 {
        self.access_ttl.num_seconds()
    }
}

//! Authentication Models
//!
//! Token claim structures and authentication response payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims for access tokens
///
/// Access tokens authorize API calls and carry the holder's email alongside
/// the subject. Both token flavors are signed with the same secret and carry
/// no type discriminator; they differ only in claim shape and lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject - user ID
    pub sub: String,

    /// Email address of the subject
    pub email: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl AccessClaims {
    /// Create access-token claims for a user
    pub fn new(user_id: Uuid, email: &str, issued_at: DateTime<Utc>, expires_at: DateTime<Utc>) -> Self {
        Self {
            sub: user_id.to_string(),
            email: email.to_string(),
            exp: expires_at.timestamp(),
            iat: issued_at.timestamp(),
        }
    }
}

/// JWT claims for refresh tokens
///
/// Refresh tokens carry only the subject; they exist solely to obtain a new
/// access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshClaims {
    /// Subject - user ID
    pub sub: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl RefreshClaims {
    /// Create refresh-token claims for a user
    pub fn new(user_id: Uuid, issued_at: DateTime<Utc>, expires_at: DateTime<Utc>) -> Self {
        Self {
            sub: user_id.to_string(),
            exp: expires_at.timestamp(),
            iat: issued_at.timestamp(),
        }
    }
}

/// Decoded token claims in a flavor-agnostic form
///
/// `email` is present for access tokens and absent for refresh tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub exp: i64,
    pub iat: i64,
}

/// Caller identity extracted from a validated access token
///
/// Handlers receive this explicitly through request extensions; no profile
/// operation reads identity from global state.
#[derive(Debug, Clone)]
pub struct UserContext {
    /// User ID from the token subject
    pub user_id: Uuid,

    /// Email carried by the access token
    pub email: String,
}

/// Minimal user info echoed back with a token pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: Uuid,
    pub email: String,
    pub role: String,
}

impl UserInfo {
    /// User info for the single implicit role this service knows
    pub fn user(id: Uuid, email: String) -> Self {
        Self {
            id,
            email,
            role: "user".to_string(),
        }
    }
}

/// Response payload for register, login and refresh
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Short-lived access token for API authentication
    pub access_token: String,

    /// Longer-lived refresh token for obtaining new access tokens
    pub refresh_token: String,

    /// Token type (always "Bearer")
    pub token_type: String,

    /// Access token lifetime in seconds
    pub expires_in: i64,

    /// Minimal info about the authenticated user
    pub user: UserInfo,
}

impl AuthResponse {
    /// Assemble a bearer response from a token pair and user info
    pub fn bearer(access_token: String, refresh_token: String, expires_in: i64, user: UserInfo) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_access_claims_creation() {
        let user_id = Uuid::new_v4();
        let now = Utc::now();
        let expires_at = now + Duration::hours(24);

        let claims = AccessClaims::new(user_id, "a@x.com", now, expires_at);

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.iat, now.timestamp());
        assert_eq!(claims.exp, expires_at.timestamp());
    }

    #[test]
    fn test_refresh_claims_have_no_email() {
        let user_id = Uuid::new_v4();
        let now = Utc::now();
        let claims = RefreshClaims::new(user_id, now, now + Duration::days(7));

        let json = serde_json::to_string(&claims).unwrap();
        assert!(!json.contains("email"));
        assert_eq!(claims.sub, user_id.to_string());
    }

    #[test]
    fn test_auth_response_is_bearer() {
        let user_id = Uuid::new_v4();
        let response = AuthResponse::bearer(
            "access".to_string(),
            "refresh".to_string(),
            86400,
            UserInfo::user(user_id, "a@x.com".to_string()),
        );

        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.expires_in, 86400);
        assert_eq!(response.user.role, "user");
        assert_eq!(response.user.id, user_id);
    }
}

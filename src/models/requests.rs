//! Request and Response Models
//!
//! Data structures for API request and response payloads with validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::profile::ProfileUpdate;
use crate::utils::validation::{email_validator, language_validator, theme_validator};

/// Request payload for registering a new user
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    /// User's email address (must be unique and valid format)
    #[validate(custom(function = email_validator))]
    pub email: String,

    /// User's password (8-128 characters)
    #[validate(length(
        min = 8,
        max = 128,
        message = "Password must be between 8 and 128 characters"
    ))]
    pub password: String,
}

/// Request payload for logging in
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address of the account
    #[validate(custom(function = email_validator))]
    pub email: String,

    /// Password to verify (cannot be empty)
    #[validate(length(min = 1, message = "Password cannot be empty"))]
    pub password: String,
}

/// Request payload for logging out
#[derive(Debug, Deserialize, Validate)]
pub struct LogoutRequest {
    /// Token the client is discarding
    #[validate(length(min = 1, message = "Token cannot be empty"))]
    pub token: String,
}

/// Request payload for refreshing access tokens
#[derive(Debug, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    /// Refresh token to exchange for a new access token
    #[validate(length(min = 1, message = "Refresh token cannot be empty"))]
    pub refresh_token: String,
}

/// Request payload for partially updating the caller's profile
///
/// Every field is optional; absent fields preserve their stored values.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    /// Updated display name
    #[validate(length(max = 255, message = "Name is too long"))]
    pub full_name: Option<String>,

    /// Updated assistant name
    #[validate(length(max = 100, message = "Assistant name is too long"))]
    pub aspri_name: Option<String>,

    /// Updated assistant persona description
    pub aspri_persona: Option<String>,

    /// Updated form of address
    #[validate(length(max = 50, message = "Call preference is too long"))]
    pub call_preference: Option<String>,

    /// Updated interface language ("id" or "en")
    #[validate(custom(function = language_validator))]
    pub preferred_language: Option<String>,

    /// Updated interface theme ("light" or "dark")
    #[validate(custom(function = theme_validator))]
    pub theme_preference: Option<String>,
}

impl From<UpdateProfileRequest> for ProfileUpdate {
    fn from(request: UpdateProfileRequest) -> Self {
        ProfileUpdate {
            full_name: request.full_name,
            aspri_name: request.aspri_name,
            aspri_persona: request.aspri_persona,
            call_preference: request.call_preference,
            preferred_language: request.preferred_language,
            theme_preference: request.theme_preference,
        }
    }
}

/// Standard success response wrapper
#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Response for logout
#[derive(Debug, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub message: String,
}

/// Response for health check
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

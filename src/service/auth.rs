//! Authentication Service
//!
//! Registration, login, logout and token refresh, orchestrating the profile
//! store, password hashing and the token service.

use std::sync::Arc;

use thiserror::Error;
use uuid::Uuid;

use crate::models::{AuthResponse, UserInfo, UserProfile};
use crate::service::token::{TokenError, TokenService};
use crate::store::{ProfileStore, StoreError};
use crate::utils::error::AppError;
use crate::utils::security::{hash_password_with_cost, verify_password, DEFAULT_BCRYPT_COST};
use crate::utils::validation::normalize_email;

/// Errors from authentication operations
#[derive(Error, Debug)]
pub enum AuthServiceError {
    /// A profile already exists for the given email
    #[error("Email already registered")]
    DuplicateEmail,

    /// Unknown email or wrong password; deliberately undifferentiated so the
    /// response cannot be used to enumerate accounts
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Refresh token failed validation
    #[error("Invalid refresh token")]
    InvalidToken,

    /// Token subject has no profile
    #[error("User not found")]
    UserNotFound,

    /// Password hashing failed
    #[error("Password hashing error: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    /// Token signing failed
    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    /// Profile store failure
    #[error("Storage error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for AuthServiceError {
    fn from(err: StoreError) -> Self {
        AuthServiceError::Store(err)
    }
}

impl From<AuthServiceError> for AppError {
    fn from(err: AuthServiceError) -> Self {
        match err {
            AuthServiceError::DuplicateEmail => {
                AppError::Conflict("Email already registered".to_string())
            }
            AuthServiceError::InvalidCredentials => {
                AppError::Authentication("Invalid email or password".to_string())
            }
            AuthServiceError::InvalidToken => {
                AppError::Authentication("Invalid refresh token".to_string())
            }
            AuthServiceError::UserNotFound => AppError::NotFound("User not found".to_string()),
            AuthServiceError::Hashing(e) => AppError::Hashing(e),
            AuthServiceError::Token(e) => AppError::Internal(e.to_string()),
            AuthServiceError::Store(StoreError::Database(e)) => AppError::Database(e),
            AuthServiceError::Store(e) => AppError::Internal(e.to_string()),
        }
    }
}

/// Result type for authentication operations
pub type AuthServiceResult<T> = Result<T, AuthServiceError>;

/// Core authentication service
pub struct AuthService {
    store: Arc<dyn ProfileStore>,
    tokens: Arc<TokenService>,
    bcrypt_cost: u32,
}

impl AuthService {
    /// Create an authentication service with the default bcrypt cost
    pub fn new(store: Arc<dyn ProfileStore>, tokens: Arc<TokenService>) -> Self {
        Self::with_bcrypt_cost(store, tokens, DEFAULT_BCRYPT_COST)
    }

    /// Create an authentication service with a custom bcrypt cost
    pub fn with_bcrypt_cost(
        store: Arc<dyn ProfileStore>,
        tokens: Arc<TokenService>,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            store,
            tokens,
            bcrypt_cost,
        }
    }

    /// Register a new user and issue their first token pair
    ///
    /// Tokens are issued strictly after the profile is persisted, so a
    /// failed insert leaves no observable state and no usable credentials.
    pub async fn register(&self, email: &str, password: &str) -> AuthServiceResult<AuthResponse> {
        let email = normalize_email(email);
        log::info!("Registering new user: {}", email);

        if self.store.find_by_email(&email).await?.is_some() {
            return Err(AuthServiceError::DuplicateEmail);
        }

        let user_id = Uuid::new_v4();
        let password_hash = hash_password_with_cost(password, self.bcrypt_cost)?;
        let profile = UserProfile::register(user_id, email.clone(), password_hash);

        // The pre-check above races with concurrent registration; the store's
        // unique key is authoritative, so a duplicate insert maps to the same
        // error and exactly one profile survives.
        self.store.insert(&profile).await.map_err(|e| match e {
            StoreError::Duplicate => AuthServiceError::DuplicateEmail,
            other => AuthServiceError::Store(other),
        })?;

        let access_token = self.tokens.issue_access_token(user_id, &email)?;
        let refresh_token = self.tokens.issue_refresh_token(user_id)?;

        log::info!("User registered: {} with id {}", email, user_id);

        Ok(AuthResponse::bearer(
            access_token,
            refresh_token,
            self.tokens.access_ttl_seconds(),
            UserInfo::user(user_id, email),
        ))
    }

    /// Authenticate a user and issue a fresh token pair
    pub async fn login(&self, email: &str, password: &str) -> AuthServiceResult<AuthResponse> {
        let email = normalize_email(email);
        log::info!("Authenticating user: {}", email);

        let profile = self
            .store
            .find_by_email(&email)
            .await?
            .ok_or(AuthServiceError::InvalidCredentials)?;

        let password_hash = profile
            .password_hash
            .as_deref()
            .ok_or(AuthServiceError::InvalidCredentials)?;

        if !verify_password(password, password_hash) {
            return Err(AuthServiceError::InvalidCredentials);
        }

        let access_token = self
            .tokens
            .issue_access_token(profile.user_id, &profile.email)?;
        let refresh_token = self.tokens.issue_refresh_token(profile.user_id)?;

        log::info!("User authenticated: {}", profile.user_id);

        Ok(AuthResponse::bearer(
            access_token,
            refresh_token,
            self.tokens.access_ttl_seconds(),
            UserInfo::user(profile.user_id, profile.email),
        ))
    }

    /// Log out
    ///
    /// Tokens are stateless and cannot be invalidated server-side; any token
    /// the caller holds remains cryptographically valid until its own
    /// expiration. This operation only gives clients a place to signal that
    /// they discarded their tokens, and it never fails.
    pub fn logout(&self, _token: &str) {
        log::info!("User logged out");
    }

    /// Exchange a refresh token for a new access token
    ///
    /// The incoming refresh token is echoed back unchanged: there is no
    /// rotation, and it stays usable until its natural expiry.
    pub async fn refresh(&self, refresh_token: &str) -> AuthServiceResult<AuthResponse> {
        log::info!("Refreshing access token");

        if !self.tokens.validate(refresh_token) {
            return Err(AuthServiceError::InvalidToken);
        }

        let user_id = self
            .tokens
            .subject(refresh_token)
            .map_err(|_| AuthServiceError::InvalidToken)?;

        let profile = self
            .store
            .find_by_id(user_id)
            .await?
            .ok_or(AuthServiceError::UserNotFound)?;

        let access_token = self
            .tokens
            .issue_access_token(profile.user_id, &profile.email)?;

        Ok(AuthResponse::bearer(
            access_token,
            refresh_token.to_string(),
            self.tokens.access_ttl_seconds(),
            UserInfo::user(profile.user_id, profile.email),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryProfileStore;

    const SECRET: &str = "test_signing_secret_key";

    fn service_with_store() -> (AuthService, Arc<MemoryProfileStore>) {
        let store = Arc::new(MemoryProfileStore::new());
        let tokens = Arc::new(TokenService::new(SECRET, 86_400_000, 604_800_000));
        // Minimum bcrypt cost keeps the suite fast
        let service = AuthService::with_bcrypt_cost(store.clone(), tokens, 4);
        (service, store)
    }

    #[tokio::test]
    async fn test_register_persists_profile_with_defaults() {
        let (service, store) = service_with_store();

        let response = service.register("a@x.com", "password1").await.unwrap();

        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.user.email, "a@x.com");
        assert_eq!(response.user.role, "user");
        assert_eq!(response.expires_in, 86_400);

        let profile = store.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(profile.user_id, response.user.id);
        assert_eq!(profile.preferred_language, "id");
        assert_eq!(profile.theme_preference, "light");
        assert!(profile.full_name.is_none());
        assert!(profile.password_hash.is_some());
        // The digest is opaque, never the plaintext
        assert_ne!(profile.password_hash.as_deref(), Some("password1"));
    }

    #[tokio::test]
    async fn test_register_normalizes_email() {
        let (service, store) = service_with_store();

        service.register("  A@X.COM ", "password1").await.unwrap();

        assert!(store.find_by_email("a@x.com").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let (service, store) = service_with_store();

        service.register("a@x.com", "password1").await.unwrap();
        let result = service.register("a@x.com", "different2").await;

        assert!(matches!(result, Err(AuthServiceError::DuplicateEmail)));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let (service, _store) = service_with_store();

        let registered = service.register("a@x.com", "password1").await.unwrap();
        let logged_in = service.login("a@x.com", "password1").await.unwrap();

        assert_eq!(registered.user.id, logged_in.user.id);
        assert_eq!(logged_in.user.email, "a@x.com");
    }

    #[tokio::test]
    async fn test_fresh_token_pair_per_login() {
        let (service, _store) = service_with_store();
        service.register("a@x.com", "password1").await.unwrap();

        let first = service.login("a@x.com", "password1").await.unwrap();
        // Issued-at has second granularity; step past it so the claims differ
        tokio::time::sleep(std::time::Duration::from_millis(1100)).await;
        let second = service.login("a@x.com", "password1").await.unwrap();

        assert_ne!(first.access_token, second.access_token);
        assert_ne!(first.refresh_token, second.refresh_token);
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let (service, _store) = service_with_store();
        service.register("a@x.com", "password1").await.unwrap();

        let result = service.login("a@x.com", "wrong").await;
        assert!(matches!(result, Err(AuthServiceError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_email_same_error() {
        let (service, _store) = service_with_store();
        service.register("a@x.com", "password1").await.unwrap();

        // Unknown email and wrong password are indistinguishable
        let unknown = service.login("b@x.com", "password1").await.unwrap_err();
        let wrong = service.login("a@x.com", "wrong").await.unwrap_err();

        assert!(matches!(unknown, AuthServiceError::InvalidCredentials));
        assert!(matches!(wrong, AuthServiceError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_credential_less_profile_fails() {
        let (service, store) = service_with_store();
        let profile = UserProfile::provision(Uuid::new_v4(), "a@x.com".to_string());
        store.insert(&profile).await.unwrap();

        let result = service.login("a@x.com", "anything").await;
        assert!(matches!(result, Err(AuthServiceError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_refresh_issues_new_access_and_echoes_refresh() {
        let (service, _store) = service_with_store();
        let registered = service.register("a@x.com", "password1").await.unwrap();

        let refreshed = service.refresh(&registered.refresh_token).await.unwrap();

        assert_eq!(refreshed.refresh_token, registered.refresh_token);
        assert_eq!(refreshed.user.id, registered.user.id);

        let tokens = TokenService::new(SECRET, 86_400_000, 604_800_000);
        assert!(tokens.validate(&refreshed.access_token));
        assert_eq!(
            tokens.subject(&refreshed.access_token).unwrap(),
            registered.user.id
        );
    }

    #[tokio::test]
    async fn test_refresh_with_garbage_token() {
        let (service, _store) = service_with_store();

        let result = service.refresh("not-a-token").await;
        assert!(matches!(result, Err(AuthServiceError::InvalidToken)));
    }

    #[tokio::test]
    async fn test_refresh_with_expired_token() {
        let (service, _store) = service_with_store();
        service.register("a@x.com", "password1").await.unwrap();

        let expired_issuer = TokenService::new(SECRET, -1000, -1000);
        let expired = expired_issuer
            .issue_refresh_token(Uuid::new_v4())
            .unwrap();

        let result = service.refresh(&expired).await;
        assert!(matches!(result, Err(AuthServiceError::InvalidToken)));
    }

    #[tokio::test]
    async fn test_refresh_for_unknown_subject() {
        let (service, _store) = service_with_store();

        let tokens = TokenService::new(SECRET, 86_400_000, 604_800_000);
        let orphan = tokens.issue_refresh_token(Uuid::new_v4()).unwrap();

        let result = service.refresh(&orphan).await;
        assert!(matches!(result, Err(AuthServiceError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_logout_leaves_tokens_valid() {
        let (service, _store) = service_with_store();
        let registered = service.register("a@x.com", "password1").await.unwrap();

        service.logout(&registered.access_token);

        let tokens = TokenService::new(SECRET, 86_400_000, 604_800_000);
        assert!(tokens.validate(&registered.access_token));
        assert!(service.refresh(&registered.refresh_token).await.is_ok());
    }
}

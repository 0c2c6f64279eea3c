//! Authentication Middleware
//!
//! Validates bearer access tokens and makes the caller identity available to
//! handlers through request extensions.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::models::UserContext;
use crate::service::TokenService;
use crate::utils::error::AppError;

/// Extension type for storing the authenticated caller in request extensions
#[derive(Debug, Clone)]
pub struct AuthUser(pub UserContext);

/// Authentication middleware for profile-scoped endpoints
///
/// Extracts the Authorization header, checks the Bearer format, validates
/// the access token, and inserts the caller's [`UserContext`] into the
/// request extensions. A refresh token presented here is rejected because it
/// carries no email claim.
pub async fn auth_middleware(
    State(token_service): State<Arc<TokenService>>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or_else(|| AppError::Authentication("Missing Authorization header".into()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Authentication("Invalid Authorization header format".into()))?;

    if !token_service.validate(token) {
        return Err(AppError::Authentication("Invalid or expired token".into()));
    }

    let claims = token_service
        .decode(token)
        .map_err(|_| AppError::Authentication("Invalid or expired token".into()))?;

    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::Authentication("Invalid token subject".into()))?;

    let email = claims
        .email
        .ok_or_else(|| AppError::Authentication("Not an access token".into()))?;

    request
        .extensions_mut()
        .insert(AuthUser(UserContext { user_id, email }));

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
        middleware::from_fn_with_state,
        routing::get,
        Router,
    };
    use tower::util::ServiceExt;

    const SECRET: &str = "test_signing_secret_key";

    fn token_service() -> Arc<TokenService> {
        Arc::new(TokenService::new(SECRET, 86_400_000, 604_800_000))
    }

    async fn test_handler() -> &'static str {
        "OK"
    }

    fn app(token_service: Arc<TokenService>) -> Router {
        Router::new()
            .route("/test", get(test_handler))
            .layer(from_fn_with_state(token_service, auth_middleware))
    }

    fn request_with_auth(value: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method(Method::GET).uri("/test");
        if let Some(value) = value {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_missing_header_rejected() {
        let response = app(token_service())
            .oneshot(request_with_auth(None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_non_bearer_header_rejected() {
        let response = app(token_service())
            .oneshot(request_with_auth(Some("Basic dXNlcjpwYXNz")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_garbage_token_rejected() {
        let response = app(token_service())
            .oneshot(request_with_auth(Some("Bearer not-a-token")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_valid_access_token_accepted() {
        let tokens = token_service();
        let access = tokens
            .issue_access_token(Uuid::new_v4(), "a@x.com")
            .unwrap();

        let response = app(tokens)
            .oneshot(request_with_auth(Some(&format!("Bearer {}", access))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_refresh_token_rejected_for_api_calls() {
        let tokens = token_service();
        let refresh = tokens.issue_refresh_token(Uuid::new_v4()).unwrap();

        let response = app(tokens)
            .oneshot(request_with_auth(Some(&format!("Bearer {}", refresh))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_expired_access_token_rejected() {
        let tokens = token_service();
        let expired_issuer = TokenService::new(SECRET, -1000, -1000);
        let expired = expired_issuer
            .issue_access_token(Uuid::new_v4(), "a@x.com")
            .unwrap();

        let response = app(tokens)
            .oneshot(request_with_auth(Some(&format!("Bearer {}", expired))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}

//! HTTP Request Handlers
//!
//! Axum handlers mapping the service surface to JSON endpoints. Profile
//! handlers take the caller's identity from the request extensions filled in
//! by the authentication middleware, never from any ambient state.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Extension, Json};
use chrono::Utc;
use validator::Validate;

use crate::api::middleware::AuthUser;
use crate::models::{
    AuthResponse, HealthCheckResponse, LoginRequest, LogoutRequest, LogoutResponse,
    ProfileResponse, RefreshTokenRequest, RegisterRequest, SuccessResponse, UpdateProfileRequest,
};
use crate::service::{AuthService, ProfileService, TokenService};
use crate::store::ProfileStore;
use crate::utils::error::{AppError, AppResult};
use crate::VERSION;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub profile_service: Arc<ProfileService>,
    pub token_service: Arc<TokenService>,
    pub store: Arc<dyn ProfileStore>,
}

/// Register a new user
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<SuccessResponse<AuthResponse>>)> {
    request
        .validate()
        .map_err(|e| AppError::Validation(format!("Invalid registration data: {}", e)))?;

    let response = state
        .auth_service
        .register(&request.email, &request.password)
        .await?;

    Ok((StatusCode::CREATED, Json(SuccessResponse::new(response))))
}

/// Authenticate a user
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<SuccessResponse<AuthResponse>>> {
    request
        .validate()
        .map_err(|e| AppError::Validation(format!("Invalid login data: {}", e)))?;

    let response = state
        .auth_service
        .login(&request.email, &request.password)
        .await?;

    Ok(Json(SuccessResponse::new(response)))
}

/// Log out
///
/// Never fails, whatever token the client sends.
pub async fn logout(
    State(state): State<AppState>,
    Json(request): Json<LogoutRequest>,
) -> Json<SuccessResponse<LogoutResponse>> {
    state.auth_service.logout(&request.token);

    Json(SuccessResponse::new(LogoutResponse {
        message: "Logged out".to_string(),
    }))
}

/// Exchange a refresh token for a new access token
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(request): Json<RefreshTokenRequest>,
) -> AppResult<Json<SuccessResponse<AuthResponse>>> {
    request
        .validate()
        .map_err(|e| AppError::Validation(format!("Invalid refresh data: {}", e)))?;

    let response = state.auth_service.refresh(&request.refresh_token).await?;

    Ok(Json(SuccessResponse::new(response)))
}

/// Get the caller's profile
pub async fn get_profile(
    State(state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
) -> AppResult<Json<SuccessResponse<ProfileResponse>>> {
    let profile = state
        .profile_service
        .get_profile(caller.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User profile not found".to_string()))?;

    Ok(Json(SuccessResponse::new(profile.into())))
}

/// Provision the caller's profile if it does not exist yet
pub async fn create_profile(
    State(state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
) -> AppResult<Json<SuccessResponse<ProfileResponse>>> {
    let profile = state
        .profile_service
        .create_profile(caller.user_id, &caller.email)
        .await?;

    Ok(Json(SuccessResponse::new(profile.into())))
}

/// Partially update the caller's profile
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    Json(request): Json<UpdateProfileRequest>,
) -> AppResult<Json<SuccessResponse<ProfileResponse>>> {
    request
        .validate()
        .map_err(|e| AppError::Validation(format!("Invalid profile data: {}", e)))?;

    let profile = state
        .profile_service
        .update_profile(caller.user_id, request.into())
        .await?;

    Ok(Json(SuccessResponse::new(profile.into())))
}

/// Health check endpoint
pub async fn health_check(
    State(state): State<AppState>,
) -> AppResult<Json<SuccessResponse<HealthCheckResponse>>> {
    state
        .store
        .health_check()
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let response = HealthCheckResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        version: VERSION.to_string(),
    };

    Ok(Json(SuccessResponse::new(response)))
}

//! ASPRI Identity Service Library
//!
//! Issues and verifies identity credentials for the ASPRI personal-assistant
//! application: user registration, login, bearer-token lifecycle, and
//! per-user profile storage with merge-update semantics.
//!
//! # Features
//!
//! - **Password security**: bcrypt hashing with configurable cost factors
//! - **Stateless tokens**: HS256-signed access and refresh tokens; no
//!   server-side session state, no revocation list
//! - **Profile management**: idempotent provisioning and partial updates
//!   that preserve untouched fields
//! - **Pluggable storage**: a `ProfileStore` trait with PostgreSQL and
//!   in-memory implementations
//! - **Configurable routing**: enable only the endpoints a deployment needs
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use aspri_identity::{
//!     api::{AppState, RouterBuilder},
//!     service::{AuthService, ProfileService, TokenService},
//!     store::{MemoryProfileStore, ProfileStore},
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store: Arc<dyn ProfileStore> = Arc::new(MemoryProfileStore::new());
//!     let tokens = Arc::new(TokenService::new("signing-secret", 86_400_000, 604_800_000));
//!
//!     let state = AppState {
//!         auth_service: Arc::new(AuthService::new(store.clone(), tokens.clone())),
//!         profile_service: Arc::new(ProfileService::new(store.clone())),
//!         token_service: tokens,
//!         store,
//!     };
//!
//!     let app = RouterBuilder::with_all_routes().build(state);
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```

/// HTTP API layer with handlers and configurable routing
pub mod api;

/// Configuration management
pub mod config;

/// Database connection management
pub mod database;

/// Data models and request/response structures
pub mod models;

/// Business logic: authentication, tokens, profiles
pub mod service;

/// Profile storage abstraction and adapters
pub mod store;

/// Shared utilities for security, validation, and error handling
pub mod utils;

// Re-export commonly used types for convenient access
pub use api::{create_routes, AppState, RouterBuilder};
pub use config::{AppConfig, JwtConfig, SecurityConfig, ServerConfig};
pub use database::{DatabaseConfig, DatabasePool};
pub use models::{
    auth::{AuthResponse, Claims, UserContext, UserInfo},
    profile::{ProfileResponse, ProfileUpdate, UserProfile},
    requests::{
        LoginRequest, LogoutRequest, RefreshTokenRequest, RegisterRequest, UpdateProfileRequest,
    },
};
pub use service::{AuthService, ProfileService, TokenService};
pub use store::{MemoryProfileStore, PgProfileStore, ProfileStore, StoreError};
pub use utils::error::{AppError, AppResult, ErrorResponse};

/// Library version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

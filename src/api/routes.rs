//! API Route Definitions
//!
//! HTTP routes and their handlers behind a builder that lets deployments
//! enable only the endpoints they need, e.g. an authentication-only node or
//! a profile-only node.

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post, MethodRouter},
    Router,
};

use super::handlers::{
    create_profile, get_profile, health_check, login, logout, refresh_token, register,
    update_profile, AppState,
};
use super::middleware::auth_middleware;

/// Builder for creating API routes with configurable endpoints
#[derive(Default)]
pub struct RouterBuilder {
    /// Whether to enable the health check endpoint (GET /health)
    health_check: bool,
    /// Whether to enable registration (POST /auth/register)
    register: bool,
    /// Whether to enable login (POST /auth/login)
    login: bool,
    /// Whether to enable logout (POST /auth/logout)
    logout: bool,
    /// Whether to enable token refresh (POST /auth/refresh)
    refresh_token: bool,
    /// Whether to enable profile retrieval (GET /profile)
    get_profile: bool,
    /// Whether to enable profile provisioning (POST /profile)
    create_profile: bool,
    /// Whether to enable profile update (PUT /profile)
    update_profile: bool,
}

impl RouterBuilder {
    /// Creates a new router builder with all routes disabled by default
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a router builder with all routes enabled
    pub fn with_all_routes() -> Self {
        Self {
            health_check: true,
            register: true,
            login: true,
            logout: true,
            refresh_token: true,
            get_profile: true,
            create_profile: true,
            update_profile: true,
        }
    }

    /// Creates a router builder with only the authentication routes
    ///
    /// Suitable for a node that issues and refreshes tokens but does not
    /// serve profile data.
    pub fn with_auth_routes() -> Self {
        Self {
            health_check: true,
            register: true,
            login: true,
            logout: true,
            refresh_token: true,
            get_profile: false,
            create_profile: false,
            update_profile: false,
        }
    }

    /// Creates a router builder with only the profile routes
    ///
    /// Token validation still happens locally, so the node needs the same
    /// signing secret as the issuing node.
    pub fn with_profile_routes() -> Self {
        Self {
            health_check: true,
            register: false,
            login: false,
            logout: false,
            refresh_token: false,
            get_profile: true,
            create_profile: true,
            update_profile: true,
        }
    }

    pub fn health_check(mut self, enabled: bool) -> Self {
        self.health_check = enabled;
        self
    }

    pub fn register(mut self, enabled: bool) -> Self {
        self.register = enabled;
        self
    }

    pub fn login(mut self, enabled: bool) -> Self {
        self.login = enabled;
        self
    }

    pub fn logout(mut self, enabled: bool) -> Self {
        self.logout = enabled;
        self
    }

    pub fn refresh_token(mut self, enabled: bool) -> Self {
        self.refresh_token = enabled;
        self
    }

    pub fn get_profile(mut self, enabled: bool) -> Self {
        self.get_profile = enabled;
        self
    }

    pub fn create_profile(mut self, enabled: bool) -> Self {
        self.create_profile = enabled;
        self
    }

    pub fn update_profile(mut self, enabled: bool) -> Self {
        self.update_profile = enabled;
        self
    }

    /// Builds the router with the enabled endpoints
    ///
    /// Profile endpoints are wrapped in the authentication middleware; the
    /// caller identity they see comes exclusively from the validated token.
    pub fn build(self, state: AppState) -> Router {
        let mut router = Router::new();

        if self.health_check {
            router = router.route("/health", get(health_check));
        }
        if self.register {
            router = router.route("/auth/register", post(register));
        }
        if self.login {
            router = router.route("/auth/login", post(login));
        }
        if self.logout {
            router = router.route("/auth/logout", post(logout));
        }
        if self.refresh_token {
            router = router.route("/auth/refresh", post(refresh_token));
        }

        let mut profile_methods = MethodRouter::new();
        let mut any_profile_route = false;
        if self.get_profile {
            profile_methods = profile_methods.get(get_profile);
            any_profile_route = true;
        }
        if self.create_profile {
            profile_methods = profile_methods.post(create_profile);
            any_profile_route = true;
        }
        if self.update_profile {
            profile_methods = profile_methods.put(update_profile);
            any_profile_route = true;
        }

        if any_profile_route {
            let protected = Router::new().route("/profile", profile_methods).layer(
                from_fn_with_state(state.token_service.clone(), auth_middleware),
            );
            router = router.merge(protected);
        }

        router.with_state(state)
    }
}

/// Creates a router with every endpoint enabled
pub fn create_routes(state: AppState) -> Router {
    RouterBuilder::with_all_routes().build(state)
}

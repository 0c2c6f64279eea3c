//! API Layer
//!
//! HTTP endpoints and request handling for the identity service.

pub mod handlers;
pub mod middleware;
pub mod routes;

// Re-export commonly used types
pub use handlers::AppState;
pub use middleware::{auth_middleware, AuthUser};
pub use routes::{create_routes, RouterBuilder};

//! Database Module
//!
//! Database connection management for the identity service.

pub mod connection;

// Re-export commonly used types
pub use connection::{DatabaseConfig, DatabasePool};

//! Profile Store
//!
//! The keyed storage abstraction for user profiles. Profiles are
//! addressable by unique id and by email; lookups return an explicit
//! present/absent result. The service layer depends only on the
//! [`ProfileStore`] trait; adapters provide PostgreSQL and in-memory
//! implementations.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::UserProfile;

pub use memory::MemoryProfileStore;
pub use postgres::PgProfileStore;

/// Errors surfaced by profile-store implementations
#[derive(Error, Debug)]
pub enum StoreError {
    /// A unique key (user id or email) is already taken
    #[error("Duplicate key")]
    Duplicate,

    /// The addressed row does not exist
    #[error("Profile not found")]
    NotFound,

    /// Underlying database failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Durable keyed storage for user profiles
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Look up a profile by user id
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserProfile>, StoreError>;

    /// Look up a profile by email
    async fn find_by_email(&self, email: &str) -> Result<Option<UserProfile>, StoreError>;

    /// Insert a new profile
    ///
    /// Fails with [`StoreError::Duplicate`] when the user id or email is
    /// already taken.
    async fn insert(&self, profile: &UserProfile) -> Result<(), StoreError>;

    /// Write back a full profile row
    ///
    /// Fails with [`StoreError::NotFound`] when no row exists for the
    /// profile's user id. The write replaces every mutable column; callers
    /// are expected to have read the row first.
    async fn update(&self, profile: &UserProfile) -> Result<(), StoreError>;

    /// Check that the store is reachable
    async fn health_check(&self) -> Result<(), StoreError>;
}

//! Profile Service
//!
//! Lookup, first-touch provisioning and merge-updates of user profiles.

use std::sync::Arc;

use thiserror::Error;
use uuid::Uuid;

use crate::models::{ProfileUpdate, UserProfile};
use crate::store::{ProfileStore, StoreError};
use crate::utils::error::AppError;
use crate::utils::validation::normalize_email;

/// Errors from profile operations
#[derive(Error, Debug)]
pub enum ProfileServiceError {
    /// No profile exists for the addressed user
    #[error("User profile not found")]
    ProfileNotFound,

    /// Profile store failure
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

impl From<ProfileServiceError> for AppError {
    fn from(err: ProfileServiceError) -> Self {
        match err {
            ProfileServiceError::ProfileNotFound => {
                AppError::NotFound("User profile not found".to_string())
            }
            ProfileServiceError::Store(StoreError::Database(e)) => AppError::Database(e),
            ProfileServiceError::Store(e) => AppError::Internal(e.to_string()),
        }
    }
}

/// Result type for profile operations
pub type ProfileServiceResult<T> = Result<T, ProfileServiceError>;

/// Core profile service
pub struct ProfileService {
    store: Arc<dyn ProfileStore>,
}

impl ProfileService {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    /// Look up a profile by user id; absent profiles are not an error
    pub async fn get_profile(&self, user_id: Uuid) -> ProfileServiceResult<Option<UserProfile>> {
        Ok(self.store.find_by_id(user_id).await?)
    }

    /// Provision a profile for a user known by id and email
    ///
    /// Idempotent: an existing profile is returned unchanged; otherwise a
    /// new one is created with the assistant-persona defaults.
    pub async fn create_profile(
        &self,
        user_id: Uuid,
        email: &str,
    ) -> ProfileServiceResult<UserProfile> {
        if let Some(existing) = self.store.find_by_id(user_id).await? {
            return Ok(existing);
        }

        let profile = UserProfile::provision(user_id, normalize_email(email));
        self.store.insert(&profile).await?;

        log::info!("Created profile for user: {}", user_id);
        Ok(profile)
    }

    /// Merge a partial update into a stored profile
    ///
    /// Supplied fields overwrite; absent fields are preserved; `updated_at`
    /// is refreshed on every successful call regardless of which fields
    /// changed. This is a plain read-modify-write: two concurrent updates to
    /// the same user resolve as last writer wins.
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        update: ProfileUpdate,
    ) -> ProfileServiceResult<UserProfile> {
        let mut profile = self
            .store
            .find_by_id(user_id)
            .await?
            .ok_or(ProfileServiceError::ProfileNotFound)?;

        profile.apply_update(&update);

        self.store.update(&profile).await.map_err(|e| match e {
            StoreError::NotFound => ProfileServiceError::ProfileNotFound,
            other => ProfileServiceError::Store(other),
        })?;

        log::info!("Updated profile for user: {}", user_id);
        Ok(profile)
    }
}

//! In-Memory Profile Store
//!
//! [`ProfileStore`] implementation over a hash map, with the same visible
//! semantics as the PostgreSQL adapter. Used by tests and local demos.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{ProfileStore, StoreError};
use crate::models::UserProfile;

/// Hash-map-backed profile store
#[derive(Default)]
pub struct MemoryProfileStore {
    profiles: RwLock<HashMap<Uuid, UserProfile>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored profiles
    pub async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }

    /// Whether the store holds no profiles
    pub async fn is_empty(&self) -> bool {
        self.profiles.read().await.is_empty()
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserProfile>, StoreError> {
        Ok(self.profiles.read().await.get(&user_id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserProfile>, StoreError> {
        let profiles = self.profiles.read().await;
        Ok(profiles.values().find(|p| p.email == email).cloned())
    }

    async fn insert(&self, profile: &UserProfile) -> Result<(), StoreError> {
        let mut profiles = self.profiles.write().await;

        if profiles.contains_key(&profile.user_id) {
            return Err(StoreError::Duplicate);
        }
        if profiles.values().any(|p| p.email == profile.email) {
            return Err(StoreError::Duplicate);
        }

        profiles.insert(profile.user_id, profile.clone());
        Ok(())
    }

    async fn update(&self, profile: &UserProfile) -> Result<(), StoreError> {
        let mut profiles = self.profiles.write().await;

        match profiles.get_mut(&profile.user_id) {
            Some(stored) => {
                *stored = profile.clone();
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

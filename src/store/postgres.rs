//! PostgreSQL Profile Store
//!
//! [`ProfileStore`] implementation over the `user_profiles` table.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{ProfileStore, StoreError};
use crate::models::UserProfile;

const PROFILE_COLUMNS: &str = "user_id, email, password_hash, full_name, aspri_name, \
     aspri_persona, call_preference, preferred_language, theme_preference, \
     created_at, updated_at";

/// PostgreSQL-backed profile store
#[derive(Clone)]
pub struct PgProfileStore {
    pool: PgPool,
}

impl PgProfileStore {
    /// Create a store over an existing connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserProfile>, StoreError> {
        let query = format!("SELECT {PROFILE_COLUMNS} FROM user_profiles WHERE user_id = $1");
        let profile = sqlx::query_as::<_, UserProfile>(&query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(profile)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserProfile>, StoreError> {
        let query = format!("SELECT {PROFILE_COLUMNS} FROM user_profiles WHERE email = $1");
        let profile = sqlx::query_as::<_, UserProfile>(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(profile)
    }

    async fn insert(&self, profile: &UserProfile) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO user_profiles
                (user_id, email, password_hash, full_name, aspri_name, aspri_persona,
                 call_preference, preferred_language, theme_preference, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(profile.user_id)
        .bind(&profile.email)
        .bind(&profile.password_hash)
        .bind(&profile.full_name)
        .bind(&profile.aspri_name)
        .bind(&profile.aspri_persona)
        .bind(&profile.call_preference)
        .bind(&profile.preferred_language)
        .bind(&profile.theme_preference)
        .bind(profile.created_at)
        .bind(profile.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => StoreError::Duplicate,
            _ => StoreError::Database(e),
        })?;

        Ok(())
    }

    async fn update(&self, profile: &UserProfile) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE user_profiles
            SET password_hash = $2,
                full_name = $3,
                aspri_name = $4,
                aspri_persona = $5,
                call_preference = $6,
                preferred_language = $7,
                theme_preference = $8,
                updated_at = $9
            WHERE user_id = $1
            "#,
        )
        .bind(profile.user_id)
        .bind(&profile.password_hash)
        .bind(&profile.full_name)
        .bind(&profile.aspri_name)
        .bind(&profile.aspri_persona)
        .bind(&profile.call_preference)
        .bind(&profile.preferred_language)
        .bind(&profile.theme_preference)
        .bind(profile.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

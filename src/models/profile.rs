//! User Profile Model
//!
//! The persistent user-profile entity and its outward-facing representation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default assistant display name for provisioned profiles
pub const DEFAULT_ASPRI_NAME: &str = "ASPRI";

/// Default assistant persona for provisioned profiles
pub const DEFAULT_ASPRI_PERSONA: &str =
    "Saya adalah asisten pribadi yang membantu Anda mengelola jadwal, catatan, dan keuangan.";

/// Default form of address used by the assistant
pub const DEFAULT_CALL_PREFERENCE: &str = "Anda";

/// Default interface language
pub const DEFAULT_LANGUAGE: &str = "id";

/// Default interface theme
pub const DEFAULT_THEME: &str = "light";

/// Internal user-profile entity as stored in `user_profiles`
///
/// This struct carries the password digest and is never exposed in API
/// responses; see [`ProfileResponse`] for the outward representation.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct UserProfile {
    /// Unique identifier, generated once at registration
    pub user_id: Uuid,

    /// User's email address (unique, normalized, immutable after creation)
    pub email: String,

    /// bcrypt digest of the user's password
    ///
    /// `None` only for profiles provisioned before the user has registered
    /// credentials; login against such a profile always fails.
    pub password_hash: Option<String>,

    /// User's display name
    pub full_name: Option<String>,

    /// Name the user gave their assistant
    pub aspri_name: Option<String>,

    /// Persona description the assistant adopts
    pub aspri_persona: Option<String>,

    /// How the assistant addresses the user
    pub call_preference: Option<String>,

    /// Interface language, `"id"` or `"en"`
    pub preferred_language: String,

    /// Interface theme, `"light"` or `"dark"`
    pub theme_preference: String,

    /// Timestamp when the profile was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the profile was last modified
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Create a profile for a newly registered user
    ///
    /// Applies the registration defaults: preference fields set to `"id"` /
    /// `"light"`, all free-text fields unset, timestamps set to now.
    pub fn register(user_id: Uuid, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            email,
            password_hash: Some(password_hash),
            full_name: None,
            aspri_name: None,
            aspri_persona: None,
            call_preference: None,
            preferred_language: DEFAULT_LANGUAGE.to_string(),
            theme_preference: DEFAULT_THEME.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a credential-less profile with the assistant-persona defaults
    ///
    /// Used for first-touch provisioning of a user known only by id and
    /// email.
    pub fn provision(user_id: Uuid, email: String) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            email,
            password_hash: None,
            full_name: None,
            aspri_name: Some(DEFAULT_ASPRI_NAME.to_string()),
            aspri_persona: Some(DEFAULT_ASPRI_PERSONA.to_string()),
            call_preference: Some(DEFAULT_CALL_PREFERENCE.to_string()),
            preferred_language: DEFAULT_LANGUAGE.to_string(),
            theme_preference: DEFAULT_THEME.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge a partial update into this profile
    ///
    /// Each supplied field overwrites the stored value; absent fields are
    /// left untouched. `updated_at` is refreshed unconditionally, even when
    /// the update carries no fields.
    pub fn apply_update(&mut self, update: &ProfileUpdate) {
        if let Some(full_name) = &update.full_name {
            self.full_name = Some(full_name.clone());
        }
        if let Some(aspri_name) = &update.aspri_name {
            self.aspri_name = Some(aspri_name.clone());
        }
        if let Some(aspri_persona) = &update.aspri_persona {
            self.aspri_persona = Some(aspri_persona.clone());
        }
        if let Some(call_preference) = &update.call_preference {
            self.call_preference = Some(call_preference.clone());
        }
        if let Some(preferred_language) = &update.preferred_language {
            self.preferred_language = preferred_language.clone();
        }
        if let Some(theme_preference) = &update.theme_preference {
            self.theme_preference = theme_preference.clone();
        }
        self.updated_at = Utc::now();
    }
}

/// Partial profile update: only supplied fields are written
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub aspri_name: Option<String>,
    pub aspri_persona: Option<String>,
    pub call_preference: Option<String>,
    pub preferred_language: Option<String>,
    pub theme_preference: Option<String>,
}

/// Profile representation for API responses
///
/// Built from [`UserProfile`] by a conversion that has no password field at
/// all, so the digest cannot leak through serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub user_id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
    pub aspri_name: Option<String>,
    pub aspri_persona: Option<String>,
    pub call_preference: Option<String>,
    pub preferred_language: String,
    pub theme_preference: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserProfile> for ProfileResponse {
    fn from(profile: UserProfile) -> Self {
        ProfileResponse {
            user_id: profile.user_id,
            email: profile.email,
            full_name: profile.full_name,
            aspri_name: profile.aspri_name,
            aspri_persona: profile.aspri_persona,
            call_preference: profile.call_preference,
            preferred_language: profile.preferred_language,
            theme_preference: profile.theme_preference,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_defaults() {
        let profile = UserProfile::register(
            Uuid::new_v4(),
            "a@x.com".to_string(),
            "digest".to_string(),
        );

        assert_eq!(profile.preferred_language, "id");
        assert_eq!(profile.theme_preference, "light");
        assert_eq!(profile.password_hash, Some("digest".to_string()));
        assert!(profile.full_name.is_none());
        assert!(profile.aspri_name.is_none());
        assert_eq!(profile.created_at, profile.updated_at);
    }

    #[test]
    fn test_provision_defaults() {
        let profile = UserProfile::provision(Uuid::new_v4(), "a@x.com".to_string());

        assert_eq!(profile.aspri_name.as_deref(), Some(DEFAULT_ASPRI_NAME));
        assert_eq!(
            profile.aspri_persona.as_deref(),
            Some(DEFAULT_ASPRI_PERSONA)
        );
        assert_eq!(
            profile.call_preference.as_deref(),
            Some(DEFAULT_CALL_PREFERENCE)
        );
        assert_eq!(profile.preferred_language, "id");
        assert_eq!(profile.theme_preference, "light");
        assert!(profile.password_hash.is_none());
    }

    #[test]
    fn test_apply_update_overwrites_only_supplied_fields() {
        let mut profile = UserProfile::register(
            Uuid::new_v4(),
            "a@x.com".to_string(),
            "digest".to_string(),
        );
        let before = profile.clone();

        profile.apply_update(&ProfileUpdate {
            full_name: Some("Budi".to_string()),
            ..Default::default()
        });

        assert_eq!(profile.full_name.as_deref(), Some("Budi"));
        assert_eq!(profile.aspri_name, before.aspri_name);
        assert_eq!(profile.preferred_language, before.preferred_language);
        assert_eq!(profile.theme_preference, before.theme_preference);
        assert_eq!(profile.email, before.email);
        assert!(profile.updated_at >= before.updated_at);
    }

    #[test]
    fn test_apply_empty_update_refreshes_updated_at_only() {
        let mut profile = UserProfile::provision(Uuid::new_v4(), "a@x.com".to_string());
        let before = profile.clone();

        profile.apply_update(&ProfileUpdate::default());

        assert!(profile.updated_at >= before.updated_at);
        assert_eq!(profile.full_name, before.full_name);
        assert_eq!(profile.aspri_name, before.aspri_name);
        assert_eq!(profile.created_at, before.created_at);
    }

    #[test]
    fn test_response_conversion_drops_digest() {
        let profile = UserProfile::register(
            Uuid::new_v4(),
            "a@x.com".to_string(),
            "digest".to_string(),
        );

        let response: ProfileResponse = profile.clone().into();
        let json = serde_json::to_string(&response).unwrap();

        assert_eq!(response.user_id, profile.user_id);
        assert!(!json.contains("digest"));
        assert!(!json.contains("password"));
    }
}

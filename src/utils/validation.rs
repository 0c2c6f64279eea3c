//! Validation Utilities
//!
//! Input validation functions for request payloads. Enumerated preference
//! values are checked here at the edge; the profile service itself accepts
//! whatever the transport layer passes through.

use regex::Regex;
use std::sync::OnceLock;
use validator::ValidationError;

/// Languages the assistant can speak
pub const SUPPORTED_LANGUAGES: [&str; 2] = ["id", "en"];

/// Supported UI themes
pub const SUPPORTED_THEMES: [&str; 2] = ["light", "dark"];

/// Validates email address format
pub fn validate_email(email: &str) -> bool {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    regex.is_match(email)
}

/// Normalizes email address to lowercase and removes surrounding whitespace
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Custom validator for email fields using the validator crate
pub fn email_validator(email: &str) -> Result<(), ValidationError> {
    if validate_email(email) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_email"))
    }
}

/// Custom validator for the preferred-language field
pub fn language_validator(language: &str) -> Result<(), ValidationError> {
    if SUPPORTED_LANGUAGES.contains(&language) {
        Ok(())
    } else {
        Err(ValidationError::new("unsupported_language"))
    }
}

/// Custom validator for the theme-preference field
pub fn theme_validator(theme: &str) -> Result<(), ValidationError> {
    if SUPPORTED_THEMES.contains(&theme) {
        Ok(())
    } else {
        Err(ValidationError::new("unsupported_theme"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("user@example.com"));
        assert!(validate_email("test.user+tag@domain.co.uk"));
        assert!(!validate_email("invalid.email"));
        assert!(!validate_email("@domain.com"));
        assert!(!validate_email("user@"));
        assert!(!validate_email(""));
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  USER@EXAMPLE.COM  "), "user@example.com");
        assert_eq!(normalize_email("Test@Domain.org"), "test@domain.org");
    }

    #[test]
    fn test_language_validator() {
        assert!(language_validator("id").is_ok());
        assert!(language_validator("en").is_ok());
        assert!(language_validator("fr").is_err());
        assert!(language_validator("").is_err());
    }

    #[test]
    fn test_theme_validator() {
        assert!(theme_validator("light").is_ok());
        assert!(theme_validator("dark").is_ok());
        assert!(theme_validator("midnight").is_err());
    }
}

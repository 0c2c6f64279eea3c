//! Configuration Module
//!
//! Environment-driven configuration for the identity service: server
//! binding, token signing and password-hashing settings.

/// Environment variable helpers
pub mod env {
    use std::env;

    /// Get environment variable as string with default
    pub fn get_string(key: &str, default: &str) -> String {
        env::var(key).unwrap_or_else(|_| default.to_string())
    }

    /// Get environment variable as u16 with default
    pub fn get_u16(key: &str, default: u16) -> u16 {
        env::var(key)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Get environment variable as u32 with default
    pub fn get_u32(key: &str, default: u32) -> u32 {
        env::var(key)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Get environment variable as u64 with default
    pub fn get_u64(key: &str, default: u64) -> u64 {
        env::var(key)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Get environment variable as i64 with default
    pub fn get_i64(key: &str, default: i64) -> i64 {
        env::var(key)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Get required environment variable or panic
    pub fn get_required(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Required environment variable {} is not set", key))
    }
}

/// Application configuration combining all service configurations
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server configuration
    pub server: ServerConfig,

    /// Token signing configuration
    pub jwt: JwtConfig,

    /// Password hashing configuration
    pub security: SecurityConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Token signing configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Shared HMAC key material; required, no default
    pub secret: String,

    /// Access-token lifetime in milliseconds (default 24h)
    pub access_ttl_millis: i64,

    /// Refresh-token lifetime in milliseconds (default 7d)
    pub refresh_ttl_millis: i64,
}

/// Password hashing configuration
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// bcrypt cost factor (higher = more secure but slower)
    pub bcrypt_cost: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: env::get_string("SERVER_HOST", "0.0.0.0"),
            port: env::get_u16("SERVER_PORT", 3000),
        }
    }
}

impl JwtConfig {
    /// Load token configuration; the signing secret must be present
    pub fn from_env() -> Self {
        Self {
            secret: env::get_required("JWT_SECRET"),
            access_ttl_millis: env::get_i64("JWT_ACCESS_TTL_MILLIS", 86_400_000),
            refresh_ttl_millis: env::get_i64("JWT_REFRESH_TTL_MILLIS", 604_800_000),
        }
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: env::get_u32("BCRYPT_COST", crate::utils::security::DEFAULT_BCRYPT_COST),
        }
    }
}

impl AppConfig {
    /// Load complete application configuration from environment
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::default(),
            jwt: JwtConfig::from_env(),
            security: SecurityConfig::default(),
        }
    }

    /// Validate the complete configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        if self.jwt.secret.is_empty() {
            return Err("JWT secret cannot be empty".to_string());
        }

        if self.jwt.access_ttl_millis <= 0 {
            return Err("Access token TTL must be positive".to_string());
        }

        if self.jwt.refresh_ttl_millis <= 0 {
            return Err("Refresh token TTL must be positive".to_string());
        }

        if !(4..=31).contains(&self.security.bcrypt_cost) {
            return Err("bcrypt cost must be between 4 and 31".to_string());
        }

        Ok(())
    }
}

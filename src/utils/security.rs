//! Security Utilities
//!
//! Password hashing and verification built on bcrypt.

use bcrypt::{hash, verify, DEFAULT_COST};

/// Default bcrypt cost for password hashing
pub const DEFAULT_BCRYPT_COST: u32 = DEFAULT_COST;

/// Hash a password using bcrypt with the default cost
pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    hash_password_with_cost(password, DEFAULT_BCRYPT_COST)
}

/// Hash a password with a custom bcrypt cost
pub fn hash_password_with_cost(password: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
    hash(password, cost)
}

/// Verify a password against a stored bcrypt digest
///
/// A digest that cannot be parsed counts as a mismatch rather than an error,
/// so callers get a single yes/no answer regardless of what is stored.
pub fn verify_password(password: &str, digest: &str) -> bool {
    verify(password, digest).unwrap_or(false)
}

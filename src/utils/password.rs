use bcrypt::{DEFAULT_COST, hash, verify};

use crate::utils::errors::AppError;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to hash password: {e}")))
}

/// Checks a submitted password against a stored bcrypt hash.
///
/// Deterministic and infallible: a malformed stored hash verifies as `false`
/// so callers observe the same outcome for a bad hash and a bad password.
/// The per-user salt is embedded in the hash string and the comparison is
/// constant-time inside bcrypt.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    verify(password, stored_hash).unwrap_or(false)
}

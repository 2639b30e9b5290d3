//! Password hashing and verification
//!
//! Stored hashes come in two formats: bcrypt (`$2a$`, `$2b$`, `$2y$`),
//! as seeded by the previous deployment, and argon2 PHC strings, which
//! is what this service produces. Verification dispatches on the prefix
//! and always goes through the hash's own constant-time comparison.
//!
//! # Performance Considerations
//!
//! Both algorithms are intentionally CPU-intensive. Use the `_async`
//! variants from request handlers so the runtime is not blocked.

use anyhow::Result;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Password hashing service
pub struct PasswordService;

impl PasswordService {
    /// Hash a password using argon2id (blocking operation)
    ///
    /// Used to seed credential rows; login never writes hashes.
    pub fn hash(password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?;
        Ok(hash.to_string())
    }

    /// Verify a password against a stored hash (blocking operation)
    ///
    /// Returns `Ok(false)` on mismatch and `Err` only when the stored
    /// hash itself is unusable.
    pub fn verify(password: &str, hash: &str) -> Result<bool> {
        if is_bcrypt(hash) {
            return bcrypt::verify(password, hash)
                .map_err(|e| anyhow::anyhow!("Invalid bcrypt hash: {}", e));
        }

        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| anyhow::anyhow!("Invalid hash format: {}", e))?;
        let argon2 = Argon2::default();
        Ok(argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Verify a password asynchronously (non-blocking)
    ///
    /// Spawns the CPU-intensive work on a blocking thread pool.
    pub async fn verify_async(password: String, hash: String) -> Result<bool> {
        tokio::task::spawn_blocking(move || Self::verify(&password, &hash))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }
}

fn is_bcrypt(hash: &str) -> bool {
    ["$2a$", "$2b$", "$2x$", "$2y$"]
        .iter()
        .any(|prefix| hash.starts_with(prefix))
}

//! Salted one-way password hashing with a fixed work factor.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::db::SeedError;

/// Argon2 memory cost in KiB.
pub const MEMORY_COST_KIB: u32 = 19 * 1024;
/// Argon2 iteration count.
pub const ITERATIONS: u32 = 2;
/// Argon2 lanes.
pub const PARALLELISM: u32 = 1;

fn hasher() -> Result<Argon2<'static>, SeedError> {
    let params = Params::new(MEMORY_COST_KIB, ITERATIONS, PARALLELISM, None)
        .map_err(|e| SeedError::PasswordHash(format!("Invalid hash parameters: {e}")))?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

/// Hashes `password` with a fresh random salt. Returns a PHC string.
pub fn hash_password(password: &str) -> Result<String, SeedError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = hasher()?
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| SeedError::PasswordHash(format!("Failed to hash password: {e}")))?;
    Ok(hash.to_string())
}

/// Checks `password` against a PHC string produced by [`hash_password`].
pub fn verify_password(password: &str, hash: &str) -> Result<bool, SeedError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| SeedError::PasswordHash(format!("Invalid password hash: {e}")))?;
    Ok(hasher()?
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

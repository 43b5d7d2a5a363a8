use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use std::sync::LazyLock;
use thiserror::Error;

static CONTEXT: LazyLock<Argon2<'static>> = LazyLock::new(|| {
    Argon2::new(
        argon2::Algorithm::Argon2id,
        argon2::Version::V0x13,
        argon2::Params::DEFAULT,
    )
});

#[derive(Debug, Error)]
#[error("Failed to generate password hash")]
pub struct HashPasswordError;

/// Hashes a plaintext password into a PHC-formatted argon2id string with
/// a freshly generated salt. Two calls with the same input produce
/// different hashes.
pub fn hash(password: impl AsRef<[u8]>) -> Result<String, HashPasswordError> {
    let salt = SaltString::generate(&mut crate::default_rng());
    let password_hash = CONTEXT
        .hash_password(password.as_ref(), &salt)
        .map_err(|_| HashPasswordError)?;

    Ok(password_hash.to_string())
}

#[derive(Debug, Error)]
#[error("Failed to verify password")]
pub struct VerifyPasswordError;

/// Verifies a plaintext password against a PHC-formatted hash.
///
/// A mismatched password is `Ok(false)`, not an error; only a malformed
/// hash or an internal argon2 failure is an error.
pub fn verify(password: impl AsRef<[u8]>, hash: &str) -> Result<bool, VerifyPasswordError> {
    let hash = PasswordHash::new(hash).map_err(|_| VerifyPasswordError)?;

    match CONTEXT.verify_password(password.as_ref(), &hash) {
        Ok(..) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(..) => Err(VerifyPasswordError),
    }
}

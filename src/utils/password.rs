use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

use crate::error::{AppError, AppResult};

/// Argon2id cost settings. Defaults target roughly 100ms per verification.
#[derive(Debug, Clone, Copy)]
pub struct PasswordParams {
    pub memory_kib: u32,
    pub iterations: u32,
}

impl Default for PasswordParams {
    fn default() -> Self {
        Self {
            memory_kib: 19_456,
            iterations: 3,
        }
    }
}

impl PasswordParams {
    fn hasher(&self) -> AppResult<Argon2<'static>> {
        let params = Params::new(self.memory_kib, self.iterations, 1, None)
            .map_err(|e| AppError::Internal(format!("Invalid password hash parameters: {}", e)))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

/// Hash on the blocking pool; Argon2 is deliberately slow.
pub async fn hash_password(params: PasswordParams, password: String) -> AppResult<String> {
    tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);
        params
            .hasher()?
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
    })
    .await
    .map_err(|e| AppError::Internal(format!("Password hashing task failed: {}", e)))?
}

/// Returns `Ok(false)` on mismatch; `Err` only when the stored hash is unusable.
pub async fn verify_password(stored_hash: String, password: String) -> AppResult<bool> {
    tokio::task::spawn_blocking(move || {
        let parsed_hash = PasswordHash::new(&stored_hash)
            .map_err(|e| AppError::Internal(format!("Failed to parse password hash: {}", e)))?;

        // Cost parameters are read back from the PHC string.
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    })
    .await
    .map_err(|e| AppError::Internal(format!("Password verification task failed: {}", e)))?
}

/// Verify against a stored hash, or against nothing when the account is
/// unknown. The miss path still pays one Argon2 run at `params` cost so the
/// two failures take comparable time.
pub async fn verify_stored_password(
    params: PasswordParams,
    stored_hash: Option<String>,
    password: String,
) -> AppResult<bool> {
    match stored_hash {
        Some(stored_hash) => verify_password(stored_hash, password).await,
        None => {
            hash_password(params, password).await?;
            Ok(false)
        }
    }
}

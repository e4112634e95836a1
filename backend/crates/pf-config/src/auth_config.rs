use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_HASH_ITERATIONS, DEFAULT_HASH_MEMORY_KIB,
    DEFAULT_HASH_PARALLELISM, DEFAULT_JWT_ISSUER, DEFAULT_TOKEN_TTL_SECS, MIN_JWT_SECRET_LENGTH,
};

use serde::Deserialize;

/// Argon2 lane limit (2^24 - 1)
const MAX_HASH_PARALLELISM: u32 = 0x00FF_FFFF;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret. Required; never logged.
    pub jwt_secret: Option<String>,
    pub issuer: String,
    pub token_ttl_secs: u64,
    /// Argon2id memory cost in KiB
    pub hash_memory_kib: u32,
    pub hash_iterations: u32,
    pub hash_parallelism: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            issuer: String::from(DEFAULT_JWT_ISSUER),
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
            hash_memory_kib: DEFAULT_HASH_MEMORY_KIB,
            hash_iterations: DEFAULT_HASH_ITERATIONS,
            hash_parallelism: DEFAULT_HASH_PARALLELISM,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match &self.jwt_secret {
            None => {
                return Err(ConfigError::auth(
                    "auth.jwt_secret is required (set PF_AUTH_JWT_SECRET)",
                ));
            }
            Some(secret) if secret.len() < MIN_JWT_SECRET_LENGTH => {
                return Err(ConfigError::auth(format!(
                    "auth.jwt_secret must be at least {} characters",
                    MIN_JWT_SECRET_LENGTH
                )));
            }
            Some(_) => {}
        }

        if self.issuer.trim().is_empty() {
            return Err(ConfigError::auth("auth.issuer cannot be empty"));
        }

        if self.token_ttl_secs == 0 {
            return Err(ConfigError::auth("auth.token_ttl_secs must be > 0"));
        }

        if self.hash_iterations == 0 || self.hash_parallelism == 0 {
            return Err(ConfigError::auth(
                "auth.hash_iterations and auth.hash_parallelism must be > 0",
            ));
        }

        if self.hash_parallelism > MAX_HASH_PARALLELISM {
            return Err(ConfigError::auth(format!(
                "auth.hash_parallelism must be <= {}",
                MAX_HASH_PARALLELISM
            )));
        }

        // Argon2 requires at least 8 KiB per lane.
        let min_memory_kib = u64::from(self.hash_parallelism) * 8;
        if u64::from(self.hash_memory_kib) < min_memory_kib {
            return Err(ConfigError::auth(format!(
                "auth.hash_memory_kib must be >= {} for parallelism {}",
                min_memory_kib, self.hash_parallelism
            )));
        }

        Ok(())
    }
}

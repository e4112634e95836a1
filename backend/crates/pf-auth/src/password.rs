//! Salted, deliberately slow password hashing (Argon2id, PHC string format).

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{self, PasswordHash, SaltString};
use argon2::{Algorithm, Argon2, Params, PasswordHasher as _, PasswordVerifier as _, Version};
use error_location::ErrorLocation;

/// Argon2id cost parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashParams {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

#[derive(Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    #[track_caller]
    pub fn new(params: HashParams) -> AuthErrorResult<Self> {
        let params = Params::new(
            params.memory_kib,
            params.iterations,
            params.parallelism,
            None,
        )
        .map_err(|e| AuthError::PasswordHash {
            message: format!("invalid argon2 parameters: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash with a fresh random salt
    #[track_caller]
    pub fn hash(&self, password: &str) -> AuthErrorResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AuthError::PasswordHash {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Compare `password` against a stored PHC hash.
    ///
    /// A mismatch is `Ok(false)`; only a malformed hash is an error. The cost
    /// parameters embedded in the stored hash are used, not this hasher's.
    #[track_caller]
    pub fn verify(&self, password: &str, stored_hash: &str) -> AuthErrorResult<bool> {
        let parsed = PasswordHash::new(stored_hash).map_err(|e| AuthError::PasswordHash {
            message: format!("stored hash is malformed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AuthError::PasswordHash {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

//! Stateless bearer tokens: HS256 JWTs binding a username, with a fixed
//! issuer and lifetime.

use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use chrono::{Duration, Utc};
use error_location::ErrorLocation;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

/// Seconds of clock skew tolerated on `exp`
const LEEWAY_SECS: u64 = 30;
/// Upper bound on token lifetime (ten years)
const MAX_TTL_SECS: u64 = 10 * 365 * 24 * 60 * 60;

/// Mints and validates tokens against one shared secret
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: String,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &[u8], issuer: impl Into<String>, ttl_secs: u64) -> Self {
        let issuer = issuer.into();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = LEEWAY_SECS;
        validation.set_issuer(&[issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "iss"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            issuer,
            ttl: Duration::seconds(ttl_secs.min(MAX_TTL_SECS) as i64),
        }
    }

    /// Mint a token for `user`
    #[track_caller]
    pub fn issue(&self, user: &str) -> AuthErrorResult<String> {
        let now = Utc::now();
        let claims = Claims {
            user: user.to_string(),
            iss: self.issuer.clone(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::JwtEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    /// Check signature, issuer and expiry, then return the claims
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                    location: ErrorLocation::from(Location::caller()),
                },
                ErrorKind::InvalidIssuer => AuthError::InvalidClaim {
                    claim: "iss".to_string(),
                    message: "unexpected issuer".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                },
                _ => AuthError::JwtDecode {
                    source: e,
                    location: ErrorLocation::from(Location::caller()),
                },
            })?;

        token_data.claims.validate()?;

        Ok(token_data.claims)
    }

    /// Validate `token` and require that it was minted for `user_name`
    #[track_caller]
    pub fn verify_subject(&self, user_name: &str, token: &str) -> AuthErrorResult<Claims> {
        let claims = self.validate(token)?;

        if claims.user != user_name {
            return Err(AuthError::SubjectMismatch {
                expected: user_name.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(claims)
    }
}

//! JWT token generation and validation
//!
//! Session tokens are HS256 JWTs signed with a single process-wide secret.
//! Keys are derived once at startup and shared through `AppState`.
//!
//! A token is valid iff its signature verifies and the current time is
//! strictly before its `exp` claim. No leeway is applied.

use anyhow::Result;
use chrono::Utc;
use clinica_shared::TokenError;
use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// JWT claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (credential record ID)
    pub id: i64,
    /// Subject username
    pub user: String,
    /// Role tag, e.g. "admin" or "staff"
    pub rol: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Pre-computed JWT keys for efficient token operations
#[derive(Clone)]
pub struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtKeys {
    /// Create new JWT keys from secret
    /// This should be called once at startup
    pub fn new(secret: &SecretString) -> Self {
        let bytes = secret.expose_secret().as_bytes();
        Self {
            encoding: Arc::new(EncodingKey::from_secret(bytes)),
            decoding: Arc::new(DecodingKey::from_secret(bytes)),
        }
    }

    pub fn encoding(&self) -> &EncodingKey {
        &self.encoding
    }

    pub fn decoding(&self) -> &DecodingKey {
        &self.decoding
    }
}

/// JWT service for token operations
///
/// Cloning is cheap: keys and validation rules sit behind `Arc`.
#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    validation: Arc<Validation>,
    ttl_secs: i64,
}

impl JwtService {
    /// Create a new JWT service with pre-computed keys
    pub fn new(secret: &SecretString, ttl_secs: i64) -> Self {
        // Expiry is checked by hand in `validate_token_at` so the boundary
        // (`now >= exp` rejects) does not depend on the library's leeway rules.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            keys: JwtKeys::new(secret),
            validation: Arc::new(validation),
            ttl_secs,
        }
    }

    /// Issue a session token for a subject, valid from now
    #[inline]
    pub fn generate_token(&self, id: i64, user: &str, rol: &str) -> Result<String> {
        self.generate_token_at(id, user, rol, Utc::now().timestamp())
    }

    /// Issue a session token as if the current time were `now`
    pub fn generate_token_at(&self, id: i64, user: &str, rol: &str, now: i64) -> Result<String> {
        let exp = now
            .checked_add(self.ttl_secs)
            .ok_or_else(|| anyhow::anyhow!("Token TTL of {}s overflows the expiry", self.ttl_secs))?;

        let claims = Claims {
            id,
            user: user.to_string(),
            rol: rol.to_string(),
            iat: now,
            exp,
        };

        encode(&Header::new(Algorithm::HS256), &claims, self.keys.encoding())
            .map_err(|e| anyhow::anyhow!("Failed to sign session token: {}", e))
    }

    /// Validate a token against the current time and return its claims
    #[inline]
    pub fn validate_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.validate_token_at(token, Utc::now().timestamp())
    }

    /// Validate a token as if the current time were `now`
    pub fn validate_token_at(&self, token: &str, now: i64) -> Result<Claims, TokenError> {
        let token_data = decode::<Claims>(token, self.keys.decoding(), &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => TokenError::BadSignature,
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed,
            })?;

        if now >= token_data.claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(token_data.claims)
    }

    /// Token lifetime in seconds
    #[inline]
    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }
}

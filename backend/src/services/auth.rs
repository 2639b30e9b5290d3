//! Credential verification and token issuance
//!
//! Login performs exactly one credential lookup, bounded by a timeout.
//! Store failures and timeouts surface as internal errors so clients can
//! tell "try again" apart from "bad credentials".

use crate::auth::{JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::CredentialStore;
use clinica_shared::{AuthenticationError, TokenResponse};
use std::time::Duration;
use tracing::info;

/// Authentication operations
pub struct AuthService;

impl AuthService {
    /// Verify a username/password pair and issue a session token
    pub async fn login(
        credentials: &dyn CredentialStore,
        jwt_service: &JwtService,
        lookup_timeout: Duration,
        username: &str,
        password: &str,
    ) -> Result<TokenResponse, ApiError> {
        let record = tokio::time::timeout(lookup_timeout, credentials.find_by_username(username))
            .await
            .map_err(|_| ApiError::Timeout("credential lookup"))?
            .map_err(ApiError::Internal)?
            .ok_or(AuthenticationError::UnknownUser)?;

        // Verify password on blocking thread pool (CPU-intensive)
        let valid = PasswordService::verify_async(password.to_string(), record.password_hash.clone())
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            return Err(AuthenticationError::InvalidCredential.into());
        }

        let token = jwt_service
            .generate_token(record.id, &record.username, &record.rol)
            .map_err(ApiError::Internal)?;

        info!(user = %record.username, rol = %record.rol, "Session token issued");

        Ok(TokenResponse { token })
    }
}

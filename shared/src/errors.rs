//! Error types for the clinic API authentication layer
//!
//! These are kept separate from the HTTP error type so the distinct
//! failure causes survive until they are logged, even though several
//! of them collapse into the same status code on the wire.

use thiserror::Error;

/// Reasons a session token fails verification
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    #[error("malformed token")]
    Malformed,

    #[error("signature mismatch")]
    BadSignature,

    #[error("token expired")]
    Expired,
}

impl TokenError {
    /// Short machine-readable label for structured logs
    pub fn reason(&self) -> &'static str {
        match self {
            TokenError::Malformed => "malformed",
            TokenError::BadSignature => "bad_signature",
            TokenError::Expired => "expired",
        }
    }
}

/// Login failures (bad credentials)
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthenticationError {
    #[error("user not found")]
    UnknownUser,

    #[error("invalid credential")]
    InvalidCredential,
}

impl AuthenticationError {
    pub fn reason(&self) -> &'static str {
        match self {
            AuthenticationError::UnknownUser => "unknown_user",
            AuthenticationError::InvalidCredential => "invalid_credential",
        }
    }
}

/// Guard failures on protected routes
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationError {
    #[error("missing token")]
    MissingToken,

    #[error("invalid token")]
    InvalidToken(TokenError),
}

impl AuthorizationError {
    /// Label that keeps the underlying cause distinguishable in logs
    pub fn reason(&self) -> &'static str {
        match self {
            AuthorizationError::MissingToken => "missing_token",
            AuthorizationError::InvalidToken(cause) => cause.reason(),
        }
    }
}

impl From<TokenError> for AuthorizationError {
    fn from(err: TokenError) -> Self {
        AuthorizationError::InvalidToken(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(TokenError::Malformed)]
    #[case(TokenError::BadSignature)]
    #[case(TokenError::Expired)]
    fn test_invalid_token_message_hides_cause(#[case] cause: TokenError) {
        let err = AuthorizationError::from(cause);
        assert_eq!(err.to_string(), "invalid token");
        assert_eq!(err.reason(), cause.reason());
    }

    #[test]
    fn test_authentication_messages_differ() {
        assert_ne!(
            AuthenticationError::UnknownUser.to_string(),
            AuthenticationError::InvalidCredential.to_string()
        );
    }

    #[test]
    fn test_missing_token_reason() {
        assert_eq!(AuthorizationError::MissingToken.reason(), "missing_token");
        assert_eq!(AuthorizationError::MissingToken.to_string(), "missing token");
    }
}

//! Token guard
//!
//! Provides Axum middleware for bearer-token validation and an extractor
//! for the resulting identity.
//!
//! Per request: `NoToken -> Extracted -> Admitted | Rejected`. A rejected
//! request never reaches the wrapped handler.

use crate::auth::jwt::{Claims, JwtService};
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{FromRef, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use clinica_shared::AuthorizationError;
use tracing::debug;

/// Identity context attached to an admitted request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: i64,
    pub username: String,
    pub role: String,
    pub issued_at: i64,
    pub expires_at: i64,
}

impl From<Claims> for Identity {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.id,
            username: claims.user,
            role: claims.rol,
            issued_at: claims.iat,
            expires_at: claims.exp,
        }
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header value
fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

/// Run the guard against a set of request headers
pub fn authenticate(headers: &HeaderMap, jwt: &JwtService) -> Result<Identity, AuthorizationError> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(bearer_token)
        .ok_or(AuthorizationError::MissingToken)?;

    let claims = jwt.validate_token(token)?;
    Ok(Identity::from(claims))
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for Identity
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Already admitted by `require_auth`
        if let Some(identity) = parts.extensions.get::<Identity>() {
            return Ok(identity.clone());
        }

        let app_state = AppState::from_ref(state);
        Ok(authenticate(&parts.headers, app_state.jwt())?)
    }
}

/// Middleware that admits only requests carrying a valid session token
///
/// Apply to a group of routes with `route_layer` so unmatched paths still 404.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let identity = authenticate(request.headers(), state.jwt())?;
    debug!(user = %identity.username, rol = %identity.role, "Request admitted");

    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use clinica_shared::TokenError;
    use rstest::rstest;
    use secrecy::Secret;

    fn jwt() -> JwtService {
        JwtService::new(&Secret::new("guard-test-secret".to_string()), 21600)
    }

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[rstest]
    #[case("Bearer abc.def.ghi", Some("abc.def.ghi"))]
    #[case("bearer abc", Some("abc"))]
    #[case("Bearer   padded  ", Some("padded"))]
    #[case("Bearer", None)]
    #[case("Bearer ", None)]
    #[case("Basic dXNlcjpwYXNz", None)]
    #[case("abc.def.ghi", None)]
    fn test_bearer_token_parsing(#[case] header: &str, #[case] expected: Option<&str>) {
        assert_eq!(bearer_token(header), expected);
    }

    #[test]
    fn test_missing_header_is_missing_token() {
        let result = authenticate(&HeaderMap::new(), &jwt());
        assert_eq!(result.unwrap_err(), AuthorizationError::MissingToken);
    }

    #[test]
    fn test_wrong_scheme_is_missing_token() {
        let result = authenticate(&headers_with("Token abc"), &jwt());
        assert_eq!(result.unwrap_err(), AuthorizationError::MissingToken);
    }

    #[test]
    fn test_garbage_is_invalid_token() {
        let result = authenticate(&headers_with("Bearer garbage"), &jwt());
        assert_eq!(
            result.unwrap_err(),
            AuthorizationError::InvalidToken(TokenError::Malformed)
        );
    }

    #[test]
    fn test_valid_token_yields_identity() {
        let jwt = jwt();
        let token = jwt.generate_token(5, "alice", "staff").unwrap();

        let identity = authenticate(&headers_with(&format!("Bearer {}", token)), &jwt).unwrap();

        assert_eq!(identity.id, 5);
        assert_eq!(identity.username, "alice");
        assert_eq!(identity.role, "staff");
        assert_eq!(identity.expires_at - identity.issued_at, 21600);
    }

    #[test]
    fn test_expired_token_is_invalid() {
        let jwt = jwt();
        let token = jwt.generate_token_at(5, "alice", "staff", 1_000).unwrap();

        let result = authenticate(&headers_with(&format!("Bearer {}", token)), &jwt);
        assert_eq!(
            result.unwrap_err(),
            AuthorizationError::InvalidToken(TokenError::Expired)
        );
    }
}

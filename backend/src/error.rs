//! Application error handling
//!
//! This module provides unified error handling for the API,
//! converting internal errors to appropriate HTTP responses.
//!
//! Authentication and authorization failures share the 401 status code,
//! but each keeps its cause in the `reason` log field.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use clinica_shared::{AuthenticationError, AuthorizationError, ErrorResponse};
use thiserror::Error;
use tracing::{debug, error, warn};

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Authentication failed: {0}")]
    Authentication(#[from] AuthenticationError),

    #[error("Authorization failed: {0}")]
    Authorization(#[from] AuthorizationError),

    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Request timed out")]
    RequestTimeout,

    #[error("Operation timed out: {0}")]
    Timeout(&'static str),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Authentication(_) | ApiError::Authorization(_) => StatusCode::UNAUTHORIZED,
            ApiError::InvalidBody(rejection) => rejection.status(),
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::RequestTimeout => StatusCode::REQUEST_TIMEOUT,
            ApiError::Timeout(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::Authentication(err) => {
                warn!(reason = err.reason(), "Login rejected");
                err.to_string()
            }
            ApiError::Authorization(err) => {
                warn!(reason = err.reason(), "Request rejected by token guard");
                err.to_string()
            }
            ApiError::InvalidBody(rejection) => {
                debug!(reason = "invalid_body", "Request body rejected");
                rejection.body_text()
            }
            ApiError::NotFound(msg) => msg.clone(),
            ApiError::RequestTimeout => {
                warn!("Request exceeded the server timeout");
                "request timed out".to_string()
            }
            ApiError::Timeout(operation) => {
                error!(operation = *operation, "Operation timed out");
                "An internal error occurred".to_string()
            }
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                "An internal error occurred".to_string()
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::FromRequest;
    use clinica_shared::{LoginRequest, TokenError};

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_unknown_user_and_bad_password_share_status() {
        let unknown = ApiError::from(AuthenticationError::UnknownUser).into_response();
        let invalid = ApiError::from(AuthenticationError::InvalidCredential).into_response();

        assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(invalid.status(), StatusCode::UNAUTHORIZED);

        assert_eq!(body_json(unknown).await["error"], "user not found");
        assert_eq!(body_json(invalid).await["error"], "invalid credential");
    }

    #[tokio::test]
    async fn test_authorization_errors_hide_cause() {
        let expired = ApiError::from(AuthorizationError::InvalidToken(TokenError::Expired));
        let response = expired.into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["error"], "invalid token");
    }

    #[tokio::test]
    async fn test_internal_error_is_generic() {
        let error = ApiError::Internal(anyhow::anyhow!("connection refused to 10.0.0.5:5432"));
        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert!(!body["error"].as_str().unwrap().contains("10.0.0.5"));
    }

    #[tokio::test]
    async fn test_rejected_body_uses_error_shape() {
        let request = axum::http::Request::builder()
            .method("POST")
            .header("content-type", "application/json")
            .body(axum::body::Body::from(r#"{"user":"alice"}"#))
            .unwrap();
        let rejection = <Json<LoginRequest> as FromRequest<()>>::from_request(request, &())
            .await
            .unwrap_err();

        let response = ApiError::from(rejection).into_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("pass"));
    }

    #[tokio::test]
    async fn test_request_timeout_keeps_error_shape() {
        let response = ApiError::RequestTimeout.into_response();

        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
        assert_eq!(body_json(response).await["error"], "request timed out");
    }

    #[test]
    fn test_timeout_is_internal() {
        let error = ApiError::Timeout("credential lookup");
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_not_found_error_status() {
        let error = ApiError::NotFound("not found".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

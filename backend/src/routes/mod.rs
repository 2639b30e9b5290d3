//! Route definitions for the Clinica API
//!
//! This module organizes all API routes and applies middleware.
//! Every clinical route sits behind the token guard; only login and
//! the health checks are reachable without a token.

use crate::auth::require_auth;
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    http::{header, Method, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod auth;
mod billing;
mod health;
mod laboratory;
mod patients;
mod pharmacy;


pub use auth::auth_routes;
pub use billing::billing_routes;
pub use laboratory::laboratory_routes;
pub use patients::patient_routes;
pub use pharmacy::pharmacy_routes;

/// Server-side limit for a whole request
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes(state.clone()))
        // Apply middleware layers
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(middleware::map_response(timeout_error_body))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `TimeoutLayer` answers with an empty 408; give it the `{error}` body
async fn timeout_error_body(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT {
        return ApiError::RequestTimeout.into_response();
    }
    response
}

/// /api routes
fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .nest("/auth", auth::auth_routes())
        .merge(protected_routes(state))
}

/// Clinical routes, all behind the token guard
fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/pacientes", patients::patient_routes())
        .nest("/laboratorio", laboratory::laboratory_routes())
        .nest("/farmacia", pharmacy::pharmacy_routes())
        .nest("/facturacion", billing::billing_routes())
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}

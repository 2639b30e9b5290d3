//! Authentication routes
//!
//! Login is public and returns the bearer token that every clinical
//! route expects.

use crate::auth::Identity;
use crate::error::ApiResult;
use crate::extract::AppJson;
use crate::services::AuthService;
use crate::state::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use clinica_shared::{LoginRequest, TokenResponse};
use serde::Serialize;

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/me", get(whoami))
}

/// Login with username and password
///
/// POST /api/auth/login
async fn login(
    State(state): State<AppState>,
    AppJson(req): AppJson<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let response = AuthService::login(
        state.credentials(),
        state.jwt(),
        state.config().database.query_timeout(),
        &req.user,
        &req.pass,
    )
    .await?;
    Ok(Json(response))
}

/// Identity carried by the presented token
#[derive(Debug, Serialize)]
pub struct WhoAmI {
    pub id: i64,
    pub user: String,
    pub rol: String,
    pub exp: i64,
}

/// Echo the caller's identity (requires authentication)
///
/// GET /api/auth/me
async fn whoami(identity: Identity) -> Json<WhoAmI> {
    Json(WhoAmI {
        id: identity.id,
        user: identity.username,
        rol: identity.role,
        exp: identity.expires_at,
    })
}

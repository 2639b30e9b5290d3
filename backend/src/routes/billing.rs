//! Billing API routes

use crate::error::ApiResult;
use crate::extract::AppJson;
use crate::repositories::{AccountRepository, PaymentRepository};
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use clinica_shared::{NewAccount, NewPayment};
use serde_json::Value;

/// Create billing routes
pub fn billing_routes() -> Router<AppState> {
    Router::new()
        .route("/cuentas", get(list_accounts).post(create_account))
        .route("/pagos", post(create_payment))
}

/// POST /api/facturacion/cuentas
async fn create_account(
    State(state): State<AppState>,
    AppJson(req): AppJson<NewAccount>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let row = AccountRepository::create(state.db(), req).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/facturacion/cuentas
async fn list_accounts(State(state): State<AppState>) -> ApiResult<Json<Vec<Value>>> {
    Ok(Json(AccountRepository::list(state.db()).await?))
}

/// POST /api/facturacion/pagos
async fn create_payment(
    State(state): State<AppState>,
    AppJson(req): AppJson<NewPayment>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let row = PaymentRepository::create(state.db(), req).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

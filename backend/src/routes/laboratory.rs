//! Laboratory API routes

use crate::error::ApiResult;
use crate::extract::AppJson;
use crate::repositories::{LabOrderRepository, LabResultRepository};
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use clinica_shared::{NewLabOrder, NewLabResult};
use serde_json::Value;

/// Create laboratory routes
pub fn laboratory_routes() -> Router<AppState> {
    Router::new()
        .route("/ordenes", get(list_orders).post(create_order))
        .route("/resultados", post(create_result))
}

/// POST /api/laboratorio/ordenes
async fn create_order(
    State(state): State<AppState>,
    AppJson(req): AppJson<NewLabOrder>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let row = LabOrderRepository::create(state.db(), req).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/laboratorio/ordenes
async fn list_orders(State(state): State<AppState>) -> ApiResult<Json<Vec<Value>>> {
    Ok(Json(LabOrderRepository::list(state.db()).await?))
}

/// POST /api/laboratorio/resultados
async fn create_result(
    State(state): State<AppState>,
    AppJson(req): AppJson<NewLabResult>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let row = LabResultRepository::create(state.db(), req).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

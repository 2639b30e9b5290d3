//! Pharmacy API routes

use crate::error::ApiResult;
use crate::extract::AppJson;
use crate::repositories::{DispensationRepository, MedicationRepository};
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use clinica_shared::{NewDispensation, NewMedication};
use serde_json::Value;

/// Create pharmacy routes
pub fn pharmacy_routes() -> Router<AppState> {
    Router::new()
        .route("/medicamentos", get(list_medications).post(create_medication))
        .route("/dispensaciones", post(create_dispensation))
}

/// POST /api/farmacia/medicamentos
async fn create_medication(
    State(state): State<AppState>,
    AppJson(req): AppJson<NewMedication>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let row = MedicationRepository::create(state.db(), req).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/farmacia/medicamentos
async fn list_medications(State(state): State<AppState>) -> ApiResult<Json<Vec<Value>>> {
    Ok(Json(MedicationRepository::list(state.db()).await?))
}

/// POST /api/farmacia/dispensaciones
async fn create_dispensation(
    State(state): State<AppState>,
    AppJson(req): AppJson<NewDispensation>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let row = DispensationRepository::create(state.db(), req).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

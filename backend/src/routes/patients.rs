//! Patient API routes

use crate::error::{ApiError, ApiResult};
use crate::extract::AppJson;
use crate::repositories::PatientRepository;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use clinica_shared::NewPatient;
use serde_json::Value;

/// Create patient routes
pub fn patient_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_patients).post(create_patient))
        .route("/:id", get(get_patient))
}

/// POST /api/pacientes - Register a patient
async fn create_patient(
    State(state): State<AppState>,
    AppJson(req): AppJson<NewPatient>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let row = PatientRepository::create(state.db(), req).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/pacientes - List patients, newest first
async fn list_patients(State(state): State<AppState>) -> ApiResult<Json<Vec<Value>>> {
    let rows = PatientRepository::list(state.db()).await?;
    Ok(Json(rows))
}

/// GET /api/pacientes/:id - Fetch one patient
async fn get_patient(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    PatientRepository::find_by_id(state.db(), id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("not found".to_string()))
}

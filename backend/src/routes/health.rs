//! Health endpoints
//!
//! `/api/health` answers `{"status":"ok"}` for existing monitors;
//! `/live` and `/ready` are for orchestrators, the latter runs `SELECT 1`.

use crate::{db, state::AppState};
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<bool>,
}

impl Health {
    fn status(status: &'static str) -> Json<Self> {
        Json(Self {
            status,
            database: None,
        })
    }
}

pub async fn health_check() -> Json<Health> {
    Health::status("ok")
}

pub async fn liveness_check() -> Json<Health> {
    Health::status("alive")
}

/// 503 until the database answers
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<Health>) {
    readiness(db::health_check(state.db()).await.is_ok())
}

fn readiness(database: bool) -> (StatusCode, Json<Health>) {
    let (code, status) = if database {
        (StatusCode::OK, "ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "not_ready")
    };
    (
        code,
        Json(Health {
            status,
            database: Some(database),
        }),
    )
}

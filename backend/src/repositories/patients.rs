//! Patient repository for database operations
//!
//! Rows are returned as JSON objects built by Postgres so the table's
//! columns pass straight through to the client.

use anyhow::Result;
use clinica_shared::NewPatient;
use serde_json::Value;
use sqlx::PgPool;

/// Patient repository for database operations
pub struct PatientRepository;

impl PatientRepository {
    /// Register a new patient
    pub async fn create(pool: &PgPool, patient: NewPatient) -> Result<Value> {
        let row = sqlx::query_scalar::<_, Value>(
            r#"
            INSERT INTO pacientes AS p (nombre, documento, fecha_nacimiento, direccion, telefono)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING to_jsonb(p)
            "#,
        )
        .bind(patient.nombre)
        .bind(patient.documento)
        .bind(patient.fecha_nacimiento)
        .bind(patient.direccion)
        .bind(patient.telefono)
        .fetch_one(pool)
        .await?;

        Ok(row)
    }

    /// List all patients, newest first
    pub async fn list(pool: &PgPool) -> Result<Vec<Value>> {
        let rows = sqlx::query_scalar::<_, Value>(
            r#"
            SELECT to_jsonb(p)
            FROM pacientes p
            ORDER BY p.id DESC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    /// Find patient by ID
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Value>> {
        let row = sqlx::query_scalar::<_, Value>(
            r#"
            SELECT to_jsonb(p)
            FROM pacientes p
            WHERE p.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(row)
    }
}

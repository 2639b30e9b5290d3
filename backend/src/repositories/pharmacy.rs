//! Pharmacy catalogue and dispensations

use anyhow::Result;
use clinica_shared::{NewDispensation, NewMedication};
use serde_json::Value;
use sqlx::PgPool;

/// Medication repository
pub struct MedicationRepository;

impl MedicationRepository {
    /// Add a medication to the catalogue
    ///
    /// The caller supplies the ID, matching how the catalogue is keyed.
    pub async fn create(pool: &PgPool, medication: NewMedication) -> Result<Value> {
        let row = sqlx::query_scalar::<_, Value>(
            r#"
            INSERT INTO medicamentos AS m (id, nombre, stock, precio)
            VALUES ($1, $2, $3, $4)
            RETURNING to_jsonb(m)
            "#,
        )
        .bind(medication.id)
        .bind(medication.nombre)
        .bind(medication.stock)
        .bind(medication.precio)
        .fetch_one(pool)
        .await?;

        Ok(row)
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Value>> {
        let rows = sqlx::query_scalar::<_, Value>("SELECT to_jsonb(m) FROM medicamentos m")
            .fetch_all(pool)
            .await?;

        Ok(rows)
    }
}

/// Dispensation repository
pub struct DispensationRepository;

impl DispensationRepository {
    pub async fn create(pool: &PgPool, dispensation: NewDispensation) -> Result<Value> {
        let row = sqlx::query_scalar::<_, Value>(
            r#"
            INSERT INTO dispensaciones AS d (paciente_id, medicamento_id, cantidad)
            VALUES ($1, $2, $3)
            RETURNING to_jsonb(d)
            "#,
        )
        .bind(dispensation.paciente_id)
        .bind(dispensation.medicamento_id)
        .bind(dispensation.cantidad)
        .fetch_one(pool)
        .await?;

        Ok(row)
    }
}

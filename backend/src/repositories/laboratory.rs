//! Laboratory orders and results

use anyhow::Result;
use clinica_shared::{NewLabOrder, NewLabResult};
use serde_json::Value;
use sqlx::PgPool;

/// Lab order repository
pub struct LabOrderRepository;

impl LabOrderRepository {
    pub async fn create(pool: &PgPool, order: NewLabOrder) -> Result<Value> {
        let row = sqlx::query_scalar::<_, Value>(
            r#"
            INSERT INTO laboratorio_ordenes AS o (paciente_id, examen, fecha)
            VALUES ($1, $2, $3)
            RETURNING to_jsonb(o)
            "#,
        )
        .bind(order.paciente_id)
        .bind(order.examen)
        .bind(order.fecha)
        .fetch_one(pool)
        .await?;

        Ok(row)
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Value>> {
        let rows = sqlx::query_scalar::<_, Value>("SELECT to_jsonb(o) FROM laboratorio_ordenes o")
            .fetch_all(pool)
            .await?;

        Ok(rows)
    }
}

/// Lab result repository
pub struct LabResultRepository;

impl LabResultRepository {
    pub async fn create(pool: &PgPool, result: NewLabResult) -> Result<Value> {
        let row = sqlx::query_scalar::<_, Value>(
            r#"
            INSERT INTO laboratorio_resultados AS r (orden_id, resultado, fecha)
            VALUES ($1, $2, $3)
            RETURNING to_jsonb(r)
            "#,
        )
        .bind(result.orden_id)
        .bind(result.resultado)
        .bind(result.fecha)
        .fetch_one(pool)
        .await?;

        Ok(row)
    }
}

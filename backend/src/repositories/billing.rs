//! Billing accounts and payments

use anyhow::Result;
use clinica_shared::{NewAccount, NewPayment};
use serde_json::Value;
use sqlx::{types::Json, PgPool};

/// Account repository
pub struct AccountRepository;

impl AccountRepository {
    pub async fn create(pool: &PgPool, account: NewAccount) -> Result<Value> {
        let row = sqlx::query_scalar::<_, Value>(
            r#"
            INSERT INTO cuentas AS c (paciente_id, servicios, total)
            VALUES ($1, $2, $3)
            RETURNING to_jsonb(c)
            "#,
        )
        .bind(account.paciente_id)
        .bind(account.servicios.map(Json))
        .bind(account.total)
        .fetch_one(pool)
        .await?;

        Ok(row)
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Value>> {
        let rows = sqlx::query_scalar::<_, Value>("SELECT to_jsonb(c) FROM cuentas c")
            .fetch_all(pool)
            .await?;

        Ok(rows)
    }
}

/// Payment repository
pub struct PaymentRepository;

impl PaymentRepository {
    pub async fn create(pool: &PgPool, payment: NewPayment) -> Result<Value> {
        let row = sqlx::query_scalar::<_, Value>(
            r#"
            INSERT INTO pagos AS pg (cuenta_id, monto, metodo, transaccion_id)
            VALUES ($1, $2, $3, $4)
            RETURNING to_jsonb(pg)
            "#,
        )
        .bind(payment.cuenta_id)
        .bind(payment.monto)
        .bind(payment.metodo)
        .bind(payment.transaccion_id)
        .fetch_one(pool)
        .await?;

        Ok(row)
    }
}

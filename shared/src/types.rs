//! API request and response types

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// API error response
///
/// Every failure is reported as `{"error": "<message>"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

// ============================================================================
// Authentication Types
// ============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub user: String,
    pub pass: String,
}

/// Login response carrying the signed session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

// ============================================================================
// Patient Types
// ============================================================================

/// Patient registration request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPatient {
    pub nombre: Option<String>,
    pub documento: Option<String>,
    #[serde(rename = "fechaNacimiento")]
    pub fecha_nacimiento: Option<NaiveDate>,
    pub direccion: Option<String>,
    pub telefono: Option<String>,
}

// ============================================================================
// Laboratory Types
// ============================================================================

/// Lab order request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewLabOrder {
    pub paciente_id: Option<i64>,
    pub examen: Option<String>,
    pub fecha: Option<NaiveDate>,
}

/// Lab result request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewLabResult {
    pub orden_id: Option<i64>,
    pub resultado: Option<String>,
    pub fecha: Option<NaiveDate>,
}

// ============================================================================
// Pharmacy Types
// ============================================================================

/// Medication catalogue entry
///
/// The catalogue is keyed by a caller-chosen code such as `"MED123"`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewMedication {
    pub id: Option<String>,
    pub nombre: Option<String>,
    pub stock: Option<i32>,
    pub precio: Option<Decimal>,
}

/// Dispensation of a medication to a patient
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewDispensation {
    pub paciente_id: Option<i64>,
    pub medicamento_id: Option<String>,
    pub cantidad: Option<i32>,
}

// ============================================================================
// Billing Types
// ============================================================================

/// Patient account (invoice)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewAccount {
    pub paciente_id: Option<i64>,
    /// Free-form map of billed services, stored as `jsonb`
    pub servicios: Option<Value>,
    pub total: Option<Decimal>,
}

/// Payment against an account
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPayment {
    pub cuenta_id: Option<i64>,
    pub monto: Option<Decimal>,
    pub metodo: Option<String>,
    pub transaccion_id: Option<String>,
}

//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod billing;
pub mod credentials;
pub mod laboratory;
pub mod patients;
pub mod pharmacy;

pub use billing::{AccountRepository, PaymentRepository};
pub use credentials::{CredentialRecord, CredentialStore, PgCredentialStore};
pub use laboratory::{LabOrderRepository, LabResultRepository};
pub use patients::PatientRepository;
pub use pharmacy::{DispensationRepository, MedicationRepository};

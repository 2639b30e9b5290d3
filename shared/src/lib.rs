//! Clinica Shared Library
//!
//! This crate contains the request/response types and authentication
//! error taxonomy shared by the API server and its tests.

pub mod errors;
pub mod types;

// Re-export commonly used items
pub use errors::*;
pub use types::*;

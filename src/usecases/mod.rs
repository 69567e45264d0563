//! Usecases Layer - The Five Operations per Entity
//!
//! `DepartmentService` and `EmployeeService` sit between the HTTP
//! adapter and the store port. Each implements the same operation set:
//! list, create, get-by-id, update (full overwrite), delete.
//!
//! Absence is a typed error here, not a thrown exception: every
//! operation returns `Result<_, ServiceError>` and the HTTP adapter
//! maps the variants to status codes.

pub mod departments;
pub mod employees;

pub use departments::DepartmentService;
pub use employees::EmployeeService;

use thiserror::Error;

use crate::domain::MissingField;

/// Failure modes of the service operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Lookup, update, or delete against an unknown identifier.
    #[error("{entity} not found with id: {id}")]
    NotFound {
        /// Entity kind for the message ("Department" / "Employee").
        entity: &'static str,
        id: i64,
    },

    /// A required field was missing or empty on create/update.
    #[error("Validation error: {0}")]
    Validation(#[from] MissingField),

    /// Persistence failure; surfaced to the caller as a server error.
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

impl ServiceError {
    /// Shorthand used by both services.
    pub(crate) fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id }
    }
}

//! Core record types for the two resource collections.
//!
//! Each entity comes in two shapes:
//! - the stored record (`Department`, `Employee`) carrying the
//!   store-assigned identifier
//! - a draft (`DepartmentDraft`, `EmployeeDraft`) holding every mutable
//!   field, used as the create and update payload
//!
//! Drafts validate field presence before any store call is made.

pub mod department;
pub mod employee;

pub use department::{Department, DepartmentDraft};
pub use employee::{Employee, EmployeeDraft};

use thiserror::Error;

/// A persisted record with a store-assigned integer identifier.
///
/// An id of 0 marks a record the store has not assigned yet; the store
/// replaces it with a fresh identifier on first save.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Singular entity kind, used in error messages and snapshot file names.
    const KIND: &'static str;

    /// Current identifier (0 when unsaved).
    fn id(&self) -> i64;

    /// Assign the identifier. Called exactly once, by the store.
    fn set_id(&mut self, id: i64);
}

/// A required text field was missing or empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} is required")]
pub struct MissingField {
    /// JSON field name as the client sent it.
    pub field: &'static str,
}

/// Reject empty or whitespace-only required text.
fn require_text(field: &'static str, value: &str) -> Result<(), MissingField> {
    if value.trim().is_empty() {
        Err(MissingField { field })
    } else {
        Ok(())
    }
}

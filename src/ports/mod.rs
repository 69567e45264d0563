//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the usecases layer requires
//! from the outside world. Adapters implement these traits.
//!
//! The only port here is the store: CRUD access to one entity
//! collection, with identifier assignment owned by the store.

pub mod store;

pub use store::{DepartmentStore, EmployeeStore};

//! Persistence Adapters - Store Port Implementations
//!
//! Two backends, both implementing `DepartmentStore` and
//! `EmployeeStore`:
//! - `memory`: process-local tables, used by tests and the "memory"
//!   backend setting
//! - `file`: JSON snapshot per collection with atomic writes, the
//!   default backend

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::InMemoryStore;

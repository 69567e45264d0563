//! Store Port - Record Persistence Interface
//!
//! One trait per entity collection, each with the same capability set:
//! list, get, save (insert-or-update), delete, plus a health probe for
//! the readiness endpoint.
//!
//! Identifier assignment is owned by the store: saving a record whose
//! id is 0 assigns the next identifier and returns the stored record;
//! saving a nonzero id overwrites that record in place. Absence is a
//! value (`Option` / `bool`), never an error - the usecases layer
//! decides what absence means for each operation.

use async_trait::async_trait;

use crate::domain::{Department, Employee};

/// Persistence for the department collection.
#[async_trait]
pub trait DepartmentStore: Send + Sync + 'static {
    /// All records in store order (insertion order for assigned ids).
    async fn list(&self) -> anyhow::Result<Vec<Department>>;

    /// Look up one record; `None` if the id is unknown.
    async fn get(&self, id: i64) -> anyhow::Result<Option<Department>>;

    /// Insert (id 0, assigns a fresh id) or overwrite (nonzero id).
    async fn save(&self, record: Department) -> anyhow::Result<Department>;

    /// Remove a record; `false` if the id was unknown.
    async fn delete(&self, id: i64) -> anyhow::Result<bool>;

    /// Whether the backing storage is usable (disk space, permissions).
    async fn is_healthy(&self) -> bool;
}

/// Persistence for the employee collection.
#[async_trait]
pub trait EmployeeStore: Send + Sync + 'static {
    /// All records in store order (insertion order for assigned ids).
    async fn list(&self) -> anyhow::Result<Vec<Employee>>;

    /// Look up one record; `None` if the id is unknown.
    async fn get(&self, id: i64) -> anyhow::Result<Option<Employee>>;

    /// Insert (id 0, assigns a fresh id) or overwrite (nonzero id).
    async fn save(&self, record: Employee) -> anyhow::Result<Employee>;

    /// Remove a record; `false` if the id was unknown.
    async fn delete(&self, id: i64) -> anyhow::Result<bool>;

    /// Whether the backing storage is usable (disk space, permissions).
    async fn is_healthy(&self) -> bool;
}

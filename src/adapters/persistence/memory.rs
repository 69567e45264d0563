//! In-Memory Store - Process-Local Tables
//!
//! One `MemTable` per collection: a `BTreeMap` keyed by id behind an
//! async `RwLock`, plus a monotonic id counter. Listing iterates the
//! map in key order, which equals insertion order for store-assigned
//! ids. Identifiers are never reused after a delete.
//!
//! This backend doubles as the test double for the store port.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{Department, Employee, Entity};
use crate::ports::{DepartmentStore, EmployeeStore};

/// Rows plus the id counter, guarded together so an insert and its
/// id assignment are one atomic step.
struct TableState<T> {
    next_id: i64,
    rows: BTreeMap<i64, T>,
}

/// A single entity collection held in memory.
pub(crate) struct MemTable<T> {
    state: RwLock<TableState<T>>,
}

impl<T: Entity> MemTable<T> {
    pub(crate) fn new() -> Self {
        Self {
            state: RwLock::new(TableState {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }

    /// Seed a table from existing rows; the counter resumes past the
    /// highest id seen.
    pub(crate) fn with_rows(next_id: i64, rows: Vec<T>) -> Self {
        let rows: BTreeMap<i64, T> = rows.into_iter().map(|r| (r.id(), r)).collect();
        let max_id = rows.keys().next_back().copied().unwrap_or(0);
        Self {
            state: RwLock::new(TableState {
                next_id: next_id.max(max_id + 1),
                rows,
            }),
        }
    }

    pub(crate) async fn list(&self) -> Vec<T> {
        self.state.read().await.rows.values().cloned().collect()
    }

    pub(crate) async fn get(&self, id: i64) -> Option<T> {
        self.state.read().await.rows.get(&id).cloned()
    }

    /// Insert (id 0) or overwrite (nonzero id). Returns the stored row.
    pub(crate) async fn save(&self, mut record: T) -> T {
        let mut state = self.state.write().await;
        if record.id() == 0 {
            let id = state.next_id;
            state.next_id += 1;
            record.set_id(id);
        } else if record.id() >= state.next_id {
            // Keep the counter monotonic past externally chosen ids
            state.next_id = record.id() + 1;
        }
        state.rows.insert(record.id(), record.clone());
        record
    }

    pub(crate) async fn delete(&self, id: i64) -> bool {
        self.state.write().await.rows.remove(&id).is_some()
    }

    /// Counter value plus all rows, for snapshotting.
    pub(crate) async fn dump(&self) -> (i64, Vec<T>) {
        let state = self.state.read().await;
        (state.next_id, state.rows.values().cloned().collect())
    }
}

/// Both collections in process memory. Contents are lost on restart.
pub struct InMemoryStore {
    departments: MemTable<Department>,
    employees: MemTable<Employee>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            departments: MemTable::new(),
            employees: MemTable::new(),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DepartmentStore for InMemoryStore {
    async fn list(&self) -> anyhow::Result<Vec<Department>> {
        Ok(self.departments.list().await)
    }

    async fn get(&self, id: i64) -> anyhow::Result<Option<Department>> {
        Ok(self.departments.get(id).await)
    }

    async fn save(&self, record: Department) -> anyhow::Result<Department> {
        Ok(self.departments.save(record).await)
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        Ok(self.departments.delete(id).await)
    }

    async fn is_healthy(&self) -> bool {
        true
    }
}

#[async_trait]
impl EmployeeStore for InMemoryStore {
    async fn list(&self) -> anyhow::Result<Vec<Employee>> {
        Ok(self.employees.list().await)
    }

    async fn get(&self, id: i64) -> anyhow::Result<Option<Employee>> {
        Ok(self.employees.get(id).await)
    }

    async fn save(&self, record: Employee) -> anyhow::Result<Employee> {
        Ok(self.employees.save(record).await)
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        Ok(self.employees.delete(id).await)
    }

    async fn is_healthy(&self) -> bool {
        true
    }
}

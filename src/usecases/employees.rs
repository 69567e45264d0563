//! Employee Service - CRUD over the Employee Store
//!
//! Structurally the twin of `DepartmentService`; only the field set
//! differs. Employees carry no audit timestamps, so the service adds
//! nothing beyond validation and NotFound mapping.

use std::sync::Arc;

use tracing::{info, instrument};

use super::ServiceError;
use crate::domain::{Employee, EmployeeDraft, Entity};
use crate::ports::EmployeeStore;

/// The five employee operations over an injected store.
pub struct EmployeeService {
    store: Arc<dyn EmployeeStore>,
}

impl EmployeeService {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    /// All employees in store order.
    pub async fn list(&self) -> Result<Vec<Employee>, ServiceError> {
        Ok(self.store.list().await?)
    }

    /// Validate and persist a new employee; the store assigns the id.
    #[instrument(skip(self, draft), fields(email = %draft.email))]
    pub async fn create(&self, draft: EmployeeDraft) -> Result<Employee, ServiceError> {
        draft.validate()?;
        let stored = self.store.save(draft.into_record()).await?;
        info!(id = stored.id, "Employee created");
        Ok(stored)
    }

    /// One employee, or NotFound.
    pub async fn get_by_id(&self, id: i64) -> Result<Employee, ServiceError> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(Employee::KIND, id))
    }

    /// Overwrite all mutable fields of an existing employee.
    #[instrument(skip(self, draft))]
    pub async fn update(&self, id: i64, draft: EmployeeDraft) -> Result<Employee, ServiceError> {
        draft.validate()?;
        let mut record = self.get_by_id(id).await?;
        draft.apply_to(&mut record);
        let stored = self.store.save(record).await?;
        info!(id, "Employee updated");
        Ok(stored)
    }

    /// Remove an existing employee, or NotFound.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if self.store.delete(id).await? {
            info!(id, "Employee deleted");
            Ok(())
        } else {
            Err(ServiceError::not_found(Employee::KIND, id))
        }
    }

    /// Backing-store health, surfaced by the readiness probe.
    pub async fn is_healthy(&self) -> bool {
        self.store.is_healthy().await
    }
}

//! Department Service - CRUD over the Department Store
//!
//! Validates drafts, turns store absence into `ServiceError::NotFound`,
//! and owns the audit timestamps (`created_at` on create, `updated_at`
//! on every update).

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument};

use super::ServiceError;
use crate::domain::{Department, DepartmentDraft, Entity};
use crate::ports::DepartmentStore;

/// The five department operations over an injected store.
pub struct DepartmentService {
    store: Arc<dyn DepartmentStore>,
}

impl DepartmentService {
    pub fn new(store: Arc<dyn DepartmentStore>) -> Self {
        Self { store }
    }

    /// All departments in store order.
    pub async fn list(&self) -> Result<Vec<Department>, ServiceError> {
        Ok(self.store.list().await?)
    }

    /// Validate and persist a new department; the store assigns the id.
    #[instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn create(&self, draft: DepartmentDraft) -> Result<Department, ServiceError> {
        draft.validate()?;
        let stored = self.store.save(draft.into_record(Utc::now())).await?;
        info!(id = stored.id, "Department created");
        Ok(stored)
    }

    /// One department, or NotFound.
    pub async fn get_by_id(&self, id: i64) -> Result<Department, ServiceError> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(Department::KIND, id))
    }

    /// Overwrite all mutable fields of an existing department.
    ///
    /// Fails with NotFound before touching the store's contents; an
    /// update can never create a record.
    #[instrument(skip(self, draft))]
    pub async fn update(
        &self,
        id: i64,
        draft: DepartmentDraft,
    ) -> Result<Department, ServiceError> {
        draft.validate()?;
        let mut record = self.get_by_id(id).await?;
        draft.apply_to(&mut record, Utc::now());
        let stored = self.store.save(record).await?;
        info!(id, "Department updated");
        Ok(stored)
    }

    /// Remove an existing department, or NotFound.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if self.store.delete(id).await? {
            info!(id, "Department deleted");
            Ok(())
        } else {
            Err(ServiceError::not_found(Department::KIND, id))
        }
    }

    /// Backing-store health, surfaced by the readiness probe.
    pub async fn is_healthy(&self) -> bool {
        self.store.is_healthy().await
    }
}

//! Integration Tests - Services over Mocked Stores
//!
//! Tests the interaction between the usecases layer and the store
//! port. Uses mockall for trait mocking and tokio::test for async
//! tests; store call counts verify that failed operations never touch
//! the persistence layer.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use mockall::mock;
use mockall::predicate::*;
use rust_decimal_macros::dec;

use orgdesk::domain::{Department, DepartmentDraft, Employee, EmployeeDraft};
use orgdesk::usecases::{DepartmentService, EmployeeService, ServiceError};

// ---- Mock Definitions ----

mock! {
    pub DeptStore {}

    #[async_trait::async_trait]
    impl orgdesk::ports::DepartmentStore for DeptStore {
        async fn list(&self) -> anyhow::Result<Vec<Department>>;
        async fn get(&self, id: i64) -> anyhow::Result<Option<Department>>;
        async fn save(&self, record: Department) -> anyhow::Result<Department>;
        async fn delete(&self, id: i64) -> anyhow::Result<bool>;
        async fn is_healthy(&self) -> bool;
    }
}

mock! {
    pub EmpStore {}

    #[async_trait::async_trait]
    impl orgdesk::ports::EmployeeStore for EmpStore {
        async fn list(&self) -> anyhow::Result<Vec<Employee>>;
        async fn get(&self, id: i64) -> anyhow::Result<Option<Employee>>;
        async fn save(&self, record: Employee) -> anyhow::Result<Employee>;
        async fn delete(&self, id: i64) -> anyhow::Result<bool>;
        async fn is_healthy(&self) -> bool;
    }
}

fn department_draft() -> DepartmentDraft {
    DepartmentDraft {
        name: "Engineering".to_string(),
        description: None,
        location: None,
        budget: dec!(500000),
    }
}

fn employee_draft() -> EmployeeDraft {
    EmployeeDraft {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone: None,
        hire_date: NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(),
        position: None,
    }
}

// ---- Department service ----

#[tokio::test]
async fn create_sends_unsaved_record_to_store() {
    let mut store = MockDeptStore::new();
    store
        .expect_save()
        .withf(|record| record.id == 0 && record.name == "Engineering")
        .times(1)
        .returning(|mut record| {
            record.id = 1;
            Ok(record)
        });

    let service = DepartmentService::new(Arc::new(store));
    let created = service.create(department_draft()).await.unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(created.budget, dec!(500000));
}

#[tokio::test]
async fn create_with_empty_name_never_touches_store() {
    let mut store = MockDeptStore::new();
    store.expect_save().times(0);

    let service = DepartmentService::new(Arc::new(store));
    let mut draft = department_draft();
    draft.name = "   ".to_string();

    let err = service.create(draft).await.unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}

#[tokio::test]
async fn update_missing_id_is_not_found_and_creates_nothing() {
    let mut store = MockDeptStore::new();
    store
        .expect_get()
        .with(eq(42))
        .times(1)
        .returning(|_| Ok(None));
    store.expect_save().times(0);

    let service = DepartmentService::new(Arc::new(store));
    let err = service.update(42, department_draft()).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { id: 42, .. }));
}

#[tokio::test]
async fn update_overwrites_all_mutable_fields() {
    let mut existing = department_draft().into_record(Utc::now());
    existing.id = 7;
    existing.description = Some("old".to_string());

    let mut store = MockDeptStore::new();
    let lookup = existing.clone();
    store
        .expect_get()
        .with(eq(7))
        .returning(move |_| Ok(Some(lookup.clone())));
    store
        .expect_save()
        .withf(|record| {
            record.id == 7
                && record.name == "Eng"
                && record.description.as_deref() == Some("core")
                && record.location.as_deref() == Some("HQ")
                && record.budget == dec!(600000)
        })
        .times(1)
        .returning(|record| Ok(record));

    let service = DepartmentService::new(Arc::new(store));
    let updated = service
        .update(
            7,
            DepartmentDraft {
                name: "Eng".to_string(),
                description: Some("core".to_string()),
                location: Some("HQ".to_string()),
                budget: dec!(600000),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.id, 7);
    assert_eq!(updated.created_at, existing.created_at);
}

#[tokio::test]
async fn delete_missing_id_is_not_found() {
    let mut store = MockDeptStore::new();
    store
        .expect_delete()
        .with(eq(9))
        .times(1)
        .returning(|_| Ok(false));

    let service = DepartmentService::new(Arc::new(store));
    let err = service.delete(9).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { id: 9, .. }));
}

#[tokio::test]
async fn store_failure_surfaces_as_store_error() {
    let mut store = MockDeptStore::new();
    store
        .expect_list()
        .returning(|| Err(anyhow::anyhow!("disk full")));

    let service = DepartmentService::new(Arc::new(store));
    let err = service.list().await.unwrap_err();
    assert!(matches!(err, ServiceError::Store(_)));
}

// ---- Employee service ----

#[tokio::test]
async fn employee_create_validates_each_required_field() {
    let mut store = MockEmpStore::new();
    store.expect_save().times(0);
    let service = EmployeeService::new(Arc::new(store));

    for field in ["first", "last", "email"] {
        let mut draft = employee_draft();
        match field {
            "first" => draft.first_name = String::new(),
            "last" => draft.last_name = String::new(),
            _ => draft.email = String::new(),
        }
        let err = service.create(draft).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }
}

#[tokio::test]
async fn employee_update_missing_id_is_not_found() {
    let mut store = MockEmpStore::new();
    store
        .expect_get()
        .with(eq(5))
        .times(1)
        .returning(|_| Ok(None));
    store.expect_save().times(0);

    let service = EmployeeService::new(Arc::new(store));
    let err = service.update(5, employee_draft()).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { id: 5, .. }));
}

#[tokio::test]
async fn employee_get_passes_record_through() {
    let mut record = employee_draft().into_record();
    record.id = 3;

    let mut store = MockEmpStore::new();
    let found = record.clone();
    store
        .expect_get()
        .with(eq(3))
        .returning(move |_| Ok(Some(found.clone())));

    let service = EmployeeService::new(Arc::new(store));
    let fetched = service.get_by_id(3).await.unwrap();
    assert_eq!(fetched, record);
}

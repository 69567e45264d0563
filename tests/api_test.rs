//! API Tests - Handlers over the In-Memory Store
//!
//! Exercises the HTTP handlers end to end (extractor in, response
//! out) with the real services and the in-memory backend, covering
//! the full lifecycle of both resource collections.

use std::collections::BTreeSet;
use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use tokio::sync::watch;

use orgdesk::adapters::http::error::ApiJson;
use orgdesk::adapters::http::{AppState, departments, employees};
use orgdesk::adapters::persistence::InMemoryStore;
use orgdesk::domain::{DepartmentDraft, EmployeeDraft};
use orgdesk::usecases::{DepartmentService, EmployeeService};

fn state() -> AppState {
    let store = Arc::new(InMemoryStore::new());
    let (_ready_tx, ready) = watch::channel(true);
    AppState {
        departments: Arc::new(DepartmentService::new(store.clone())),
        employees: Arc::new(EmployeeService::new(store)),
        ready,
    }
}

fn employee_draft(email: &str) -> EmployeeDraft {
    EmployeeDraft {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: email.to_string(),
        phone: Some("555-0100".to_string()),
        hire_date: NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(),
        position: Some("Engineer".to_string()),
    }
}

#[tokio::test]
async fn department_lifecycle_scenario() {
    let state = state();

    // Create {name: "Engineering", budget: 500000}
    let (status, Json(created)) = departments::create(
        State(state.clone()),
        ApiJson(DepartmentDraft {
            name: "Engineering".to_string(),
            description: None,
            location: None,
            budget: dec!(500000),
        }),
    )
    .await
    .unwrap();
    assert_eq!(status, StatusCode::CREATED);
    assert!(created.id > 0);
    assert_eq!(created.name, "Engineering");
    assert_eq!(created.budget, dec!(500000));

    // PUT all four mutable fields
    let Json(updated) = departments::update(
        State(state.clone()),
        Path(created.id),
        ApiJson(DepartmentDraft {
            name: "Eng".to_string(),
            description: Some("core".to_string()),
            location: Some("HQ".to_string()),
            budget: dec!(600000),
        }),
    )
    .await
    .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Eng");
    assert_eq!(updated.description.as_deref(), Some("core"));
    assert_eq!(updated.location.as_deref(), Some("HQ"));
    assert_eq!(updated.budget, dec!(600000));
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);

    // DELETE confirms, then GET is a 404
    let Json(confirmation) = departments::remove(State(state.clone()), Path(created.id))
        .await
        .unwrap();
    assert!(confirmation.deleted);

    let err = departments::get_by_id(State(state), Path(created.id))
        .await
        .unwrap_err();
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_then_get_returns_equal_record() {
    let state = state();

    let (_, Json(created)) = employees::create(
        State(state.clone()),
        ApiJson(employee_draft("ada@example.com")),
    )
    .await
    .unwrap();

    let Json(fetched) = employees::get_by_id(State(state), Path(created.id))
        .await
        .unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn listing_returns_every_created_record() {
    let state = state();
    let mut expected = BTreeSet::new();

    for i in 0..5 {
        let (_, Json(created)) = employees::create(
            State(state.clone()),
            ApiJson(employee_draft(&format!("employee{i}@example.com"))),
        )
        .await
        .unwrap();
        expected.insert(created.id);
    }

    let Json(all) = employees::list(State(state)).await.unwrap();
    let listed: BTreeSet<i64> = all.iter().map(|e| e.id).collect();
    assert_eq!(listed, expected);
}

#[tokio::test]
async fn update_with_absent_optionals_clears_them() {
    let state = state();

    let (_, Json(created)) = employees::create(
        State(state.clone()),
        ApiJson(employee_draft("ada@example.com")),
    )
    .await
    .unwrap();
    assert!(created.phone.is_some());

    // Payload without phone/position, as the front-end would send it
    let draft: EmployeeDraft = serde_json::from_str(
        r#"{
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "hireDate": "2023-05-01"
        }"#,
    )
    .unwrap();

    let Json(updated) = employees::update(State(state), Path(created.id), ApiJson(draft))
        .await
        .unwrap();
    assert_eq!(updated.phone, None);
    assert_eq!(updated.position, None);
}

#[tokio::test]
async fn validation_failure_is_a_400_and_stores_nothing() {
    let state = state();

    let err = departments::create(
        State(state.clone()),
        ApiJson(DepartmentDraft {
            name: String::new(),
            description: None,
            location: None,
            budget: dec!(0),
        }),
    )
    .await
    .unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);

    let Json(all) = departments::list(State(state)).await.unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn unknown_ids_map_to_404_everywhere() {
    let state = state();

    let err = employees::get_by_id(State(state.clone()), Path(99))
        .await
        .unwrap_err();
    assert_eq!(err.status(), StatusCode::NOT_FOUND);

    let err = employees::update(
        State(state.clone()),
        Path(99),
        ApiJson(employee_draft("ghost@example.com")),
    )
    .await
    .unwrap_err();
    assert_eq!(err.status(), StatusCode::NOT_FOUND);

    let err = employees::remove(State(state.clone()), Path(99))
        .await
        .unwrap_err();
    assert_eq!(err.status(), StatusCode::NOT_FOUND);

    // A failed update must not create the record
    let Json(all) = employees::list(State(state)).await.unwrap();
    assert!(all.is_empty());
}

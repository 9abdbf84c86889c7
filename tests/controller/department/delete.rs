//! Tests for the delete_department endpoint and its dependent-records guard.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use eduportal::{
    model::department::CreateDepartmentRequest,
    server::{
        controller::department::{create_department, delete_department},
        data::{
            department::DepartmentRepository,
            student::{StudentRepository, StudentWrite},
        },
    },
};

use super::*;

async fn seed_department(state: &eduportal::server::model::app::AppState) -> i32 {
    create_department(
        State(state.clone()),
        Json(CreateDepartmentRequest {
            code: "CS".to_string(),
            name: "Computer Science".to_string(),
            description: None,
            head_faculty_id: None,
            building: None,
            contact_email: None,
            contact_phone: None,
            status: None,
        }),
    )
    .await
    .unwrap();

    DepartmentRepository::new(&state.db).find_all().await.unwrap()[0].id
}

/// Tests deleting a department with no dependent records.
///
/// Expected: 200 OK and the row removed.
#[tokio::test]
async fn success_with_no_dependents() {
    let TestSetup { state, .. } = test_setup().await;
    let id = seed_department(&state).await;

    let result = delete_department(State(state.clone()), Path(id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    assert!(DepartmentRepository::new(&state.db)
        .get_by_id(id)
        .await
        .unwrap()
        .is_none());
}

/// Tests the dependent-records guard with an enrolled student.
///
/// Expected: 409 Conflict and the department still present.
#[tokio::test]
async fn conflict_with_students() {
    let TestSetup { state, .. } = test_setup().await;
    let id = seed_department(&state).await;

    StudentRepository::new(&state.db)
        .create(StudentWrite {
            student_id: "STU-001".to_string(),
            full_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: None,
            department_id: Some(id),
            year_level: 1,
            status: entity::student::StudentStatus::Active,
            enrollment_date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            date_of_birth: None,
            address: None,
            guardian_name: None,
            guardian_phone: None,
        })
        .await
        .unwrap();

    let result = delete_department(State(state.clone()), Path(id)).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    assert!(DepartmentRepository::new(&state.db)
        .get_by_id(id)
        .await
        .unwrap()
        .is_some());
}

/// Tests deleting a department that does not exist.
///
/// Expected: 404 Not Found.
#[tokio::test]
async fn not_found_for_missing_department() {
    let TestSetup { state, .. } = test_setup().await;

    let result = delete_department(State(state.clone()), Path(42)).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

//! Tests for the delete_course endpoint and its enrollment guard.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use eduportal::server::{
    controller::course::{create_course, delete_course},
    data::{
        course::CourseRepository,
        enrollment::EnrollmentRepository,
        student::{StudentRepository, StudentWrite},
    },
};
use eduportal::model::course::CreateCourseRequest;

use super::*;

async fn seed_course(state: &eduportal::server::model::app::AppState) -> i32 {
    create_course(
        State(state.clone()),
        Json(CreateCourseRequest {
            course_code: "CS101".to_string(),
            course_name: "Intro".to_string(),
            description: None,
            credits: Some(3),
            department_id: None,
            department_name: None,
            faculty_id: None,
            semester: None,
            year_level: None,
            status: None,
        }),
    )
    .await
    .unwrap();

    CourseRepository::new(&state.db).find_all().await.unwrap()[0].id
}

/// Tests deleting a course with no enrollments.
///
/// Expected: 200 OK and the row removed.
#[tokio::test]
async fn success_without_enrollments() {
    let TestSetup { state, .. } = test_setup().await;
    let id = seed_course(&state).await;

    let result = delete_course(State(state.clone()), Path(id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    assert!(CourseRepository::new(&state.db)
        .get_by_id(id)
        .await
        .unwrap()
        .is_none());
}

/// Tests the enrollment deletion guard.
///
/// Expected: 409 Conflict while a student is enrolled, and the course row
/// still present afterwards.
#[tokio::test]
async fn conflict_with_enrollments() {
    let TestSetup { state, .. } = test_setup().await;
    let id = seed_course(&state).await;

    let student = StudentRepository::new(&state.db)
        .create(StudentWrite {
            student_id: "STU-001".to_string(),
            full_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: None,
            department_id: None,
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

    EnrollmentRepository::new(&state.db)
        .create(
            id,
            student.id,
            None,
            entity::enrollment::EnrollmentStatus::Enrolled,
        )
        .await
        .unwrap();

    let result = delete_course(State(state.clone()), Path(id)).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    assert!(CourseRepository::new(&state.db)
        .get_by_id(id)
        .await
        .unwrap()
        .is_some());
}

/// Tests deleting a course that does not exist.
///
/// Expected: 404 Not Found.
#[tokio::test]
async fn not_found_for_missing_course() {
    let TestSetup { state, .. } = test_setup().await;

    let result = delete_course(State(state.clone()), Path(42)).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

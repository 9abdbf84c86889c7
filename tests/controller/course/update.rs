//! Tests for the update_course endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use eduportal::{
    model::course::{CreateCourseRequest, UpdateCourseRequest},
    server::{
        controller::course::{create_course, update_course},
        data::course::CourseRepository,
    },
};

use super::*;

async fn seed_course(state: &eduportal::server::model::app::AppState, course_code: &str) -> i32 {
    create_course(
        State(state.clone()),
        Json(CreateCourseRequest {
            course_code: course_code.to_string(),
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

    CourseRepository::new(&state.db)
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .find(|c| c.course_code == course_code)
        .unwrap()
        .id
}

fn update_request() -> UpdateCourseRequest {
    UpdateCourseRequest {
        course_code: None,
        course_name: None,
        description: None,
        credits: None,
        department_id: None,
        department_name: None,
        faculty_id: None,
        semester: None,
        year_level: None,
        status: None,
    }
}

/// Tests updating a course to its own course code.
///
/// Expected: 200 OK, self-exclusion makes the uniqueness check pass.
#[tokio::test]
async fn success_updating_to_own_code() {
    let TestSetup { state, .. } = test_setup().await;
    let id = seed_course(&state, "CS101").await;

    let mut request = update_request();
    request.course_code = Some("CS101".to_string());
    request.course_name = Some("Intro to Programming".to_string());

    let result = update_course(State(state.clone()), Path(id), Json(request)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
}

/// Tests updating a course to another course's code.
///
/// Expected: 409 Conflict and the original code untouched.
#[tokio::test]
async fn conflict_on_taken_code() {
    let TestSetup { state, .. } = test_setup().await;
    seed_course(&state, "CS101").await;
    let other = seed_course(&state, "CS102").await;

    let mut request = update_request();
    request.course_code = Some("CS101".to_string());

    let result = update_course(State(state.clone()), Path(other), Json(request)).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let course = CourseRepository::new(&state.db)
        .get_by_id(other)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(course.course_code, "CS102");
}

/// Tests updating a course that does not exist.
///
/// Expected: 404 Not Found.
#[tokio::test]
async fn not_found_for_missing_course() {
    let TestSetup { state, .. } = test_setup().await;

    let result = update_course(State(state.clone()), Path(42), Json(update_request())).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

//! Tests for the create_course endpoint.
//!
//! This module verifies course creation through the HTTP handler, including
//! department resolution by name, duplicate course code rejection, and field
//! validation failures.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use eduportal::{
    model::course::CreateCourseRequest,
    server::{controller::course::create_course, data::course::CourseRepository},
};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use super::*;

fn request(course_code: &str, department_name: Option<&str>) -> CreateCourseRequest {
    CreateCourseRequest {
        course_code: course_code.to_string(),
        course_name: "Intro".to_string(),
        description: None,
        credits: Some(3),
        department_id: None,
        department_name: department_name.map(str::to_string),
        faculty_id: None,
        semester: None,
        year_level: None,
        status: Some("active".to_string()),
    }
}

/// Tests course creation with an unknown department name on an empty database.
///
/// Expected: 201 Created, and exactly one new department named
/// "Computer Science" linked to the course.
#[tokio::test]
async fn success_creates_and_links_department() {
    let TestSetup { state, .. } = test_setup().await;

    let result = create_course(
        State(state.clone()),
        Json(request("CS101", Some("Computer Science"))),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let course = CourseRepository::new(&state.db)
        .find_all()
        .await
        .unwrap()
        .pop()
        .unwrap();
    assert!(course.department_id.is_some());

    let departments = entity::prelude::Department::find()
        .filter(entity::department::Column::Name.eq("Computer Science"))
        .count(&state.db)
        .await
        .unwrap();
    assert_eq!(departments, 1);
}

/// Tests that a repeated department name reuses the existing department.
///
/// Expected: both courses share one department row.
#[tokio::test]
async fn success_second_course_reuses_department() {
    let TestSetup { state, .. } = test_setup().await;

    create_course(
        State(state.clone()),
        Json(request("CS101", Some("Computer Science"))),
    )
    .await
    .unwrap();

    create_course(
        State(state.clone()),
        Json(request("CS102", Some("computer science"))),
    )
    .await
    .unwrap();

    let departments = entity::prelude::Department::find()
        .count(&state.db)
        .await
        .unwrap();
    assert_eq!(departments, 1);
}

/// Tests duplicate course code rejection.
///
/// Expected: 409 Conflict on the second create, with exactly one CS101 row
/// remaining.
#[tokio::test]
async fn conflict_on_duplicate_course_code() {
    let TestSetup { state, .. } = test_setup().await;

    create_course(State(state.clone()), Json(request("CS101", None)))
        .await
        .unwrap();

    let result = create_course(State(state.clone()), Json(request("CS101", None))).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let courses = entity::prelude::Course::find()
        .filter(entity::course::Column::CourseCode.eq("CS101"))
        .count(&state.db)
        .await
        .unwrap();
    assert_eq!(courses, 1);
}

/// Tests field validation failure for a bad semester value.
///
/// Expected: 422 Unprocessable Entity and no course row created.
#[tokio::test]
async fn validation_error_on_bad_semester() {
    let TestSetup { state, .. } = test_setup().await;

    let mut bad_request = request("CS101", None);
    bad_request.semester = Some("winter".to_string());

    let result = create_course(State(state.clone()), Json(bad_request)).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let courses = entity::prelude::Course::find().count(&state.db).await.unwrap();
    assert_eq!(courses, 0);
}

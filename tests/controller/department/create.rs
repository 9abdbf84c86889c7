//! Tests for the create_department endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use eduportal::{
    model::department::CreateDepartmentRequest,
    server::controller::department::create_department,
};

use super::*;

fn request(code: &str, name: &str) -> CreateDepartmentRequest {
    CreateDepartmentRequest {
        code: code.to_string(),
        name: name.to_string(),
        description: None,
        head_faculty_id: None,
        building: None,
        contact_email: None,
        contact_phone: None,
        status: Some("active".to_string()),
    }
}

/// Tests creating a department with valid fields.
///
/// Expected: 201 Created.
#[tokio::test]
async fn success_with_valid_fields() {
    let TestSetup { state, .. } = test_setup().await;

    let result = create_department(State(state.clone()), Json(request("CS", "Computer Science"))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
}

/// Tests duplicate name rejection across casings.
///
/// Expected: 409 Conflict on the second create.
#[tokio::test]
async fn conflict_on_duplicate_name() {
    let TestSetup { state, .. } = test_setup().await;

    create_department(State(state.clone()), Json(request("CS", "Computer Science")))
        .await
        .unwrap();

    let result =
        create_department(State(state.clone()), Json(request("CSX", "computer science"))).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

/// Tests field validation for a malformed contact email.
///
/// Expected: 422 Unprocessable Entity.
#[tokio::test]
async fn validation_error_on_bad_email() {
    let TestSetup { state, .. } = test_setup().await;

    let mut bad_request = request("CS", "Computer Science");
    bad_request.contact_email = Some("not-an-email".to_string());

    let result = create_department(State(state.clone()), Json(bad_request)).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

/// Tests that an unknown head_faculty_id reference is rejected.
///
/// Expected: 422 Unprocessable Entity.
#[tokio::test]
async fn validation_error_on_unknown_head_faculty() {
    let TestSetup { state, .. } = test_setup().await;

    let mut bad_request = request("CS", "Computer Science");
    bad_request.head_faculty_id = Some(99);

    let result = create_department(State(state.clone()), Json(bad_request)).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

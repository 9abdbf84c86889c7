//! Tests for the delete_user endpoint and the last-admin guard.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use eduportal::{
    model::user::CreateUserRequest,
    server::{
        controller::user::{create_user, delete_user},
        data::user::UserRepository,
    },
};

use super::*;

async fn seed_user(
    state: &eduportal::server::model::app::AppState,
    email: &str,
    role: &str,
) -> i32 {
    create_user(
        State(state.clone()),
        Json(CreateUserRequest {
            name: "Test User".to_string(),
            email: email.to_string(),
            password: "correct horse battery staple".to_string(),
            role: role.to_string(),
            status: None,
        }),
    )
    .await
    .unwrap();

    UserRepository::new(&state.db)
        .get_by_email(email)
        .await
        .unwrap()
        .unwrap()
        .id
}

/// Tests that deleting the sole admin is refused.
///
/// Expected: 409 Conflict and the admin still present.
#[tokio::test]
async fn conflict_deleting_sole_admin() {
    let TestSetup { state, .. } = test_setup().await;
    let admin = seed_user(&state, "admin@example.com", "admin").await;

    let result = delete_user(State(state.clone()), Path(admin)).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    assert!(UserRepository::new(&state.db)
        .get_by_id(admin)
        .await
        .unwrap()
        .is_some());
}

/// Tests deleting an admin while another admin remains.
///
/// Expected: 200 OK.
#[tokio::test]
async fn success_deleting_non_sole_admin() {
    let TestSetup { state, .. } = test_setup().await;
    let first = seed_user(&state, "admin@example.com", "admin").await;
    seed_user(&state, "second@example.com", "admin").await;

    let result = delete_user(State(state.clone()), Path(first)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
}

/// Tests deleting a non-admin account.
///
/// Expected: 200 OK regardless of the admin count.
#[tokio::test]
async fn success_deleting_staff() {
    let TestSetup { state, .. } = test_setup().await;
    seed_user(&state, "admin@example.com", "admin").await;
    let staff = seed_user(&state, "staff@example.com", "staff").await;

    let result = delete_user(State(state.clone()), Path(staff)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
}

/// Tests deleting a user that does not exist.
///
/// Expected: 404 Not Found.
#[tokio::test]
async fn not_found_for_missing_user() {
    let TestSetup { state, .. } = test_setup().await;

    let result = delete_user(State(state.clone()), Path(42)).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

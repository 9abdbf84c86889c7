//! Tests for the login endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use eduportal::{
    model::{auth::LoginRequest, user::CreateUserRequest},
    server::{
        controller::{auth::login, user::create_user},
        model::session::user::SessionUserId,
    },
};

use super::*;

async fn seed_user(state: &eduportal::server::model::app::AppState) {
    create_user(
        State(state.clone()),
        Json(CreateUserRequest {
            name: "System Administrator".to_string(),
            email: "admin@eduportal.com".to_string(),
            password: "admin-password".to_string(),
            role: "admin".to_string(),
            status: None,
        }),
    )
    .await
    .unwrap();
}

/// Tests login with valid credentials.
///
/// Expected: 200 OK and the user ID stored in the session.
#[tokio::test]
async fn success_with_valid_credentials() {
    let TestSetup { state, session } = test_setup().await;
    seed_user(&state).await;

    let result = login(
        State(state.clone()),
        session.clone(),
        Json(LoginRequest {
            email: "admin@eduportal.com".to_string(),
            password: "admin-password".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let user_id = SessionUserId::get(&session).await.unwrap();
    assert!(user_id.is_some());
}

/// Tests login with a wrong password.
///
/// Expected: 401 Unauthorized and no session user.
#[tokio::test]
async fn unauthorized_with_wrong_password() {
    let TestSetup { state, session } = test_setup().await;
    seed_user(&state).await;

    let result = login(
        State(state.clone()),
        session.clone(),
        Json(LoginRequest {
            email: "admin@eduportal.com".to_string(),
            password: "not-the-password".to_string(),
        }),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let user_id = SessionUserId::get(&session).await.unwrap();
    assert!(user_id.is_none());
}

/// Tests login with an email that has no account.
///
/// Expected: 401 Unauthorized.
#[tokio::test]
async fn unauthorized_with_unknown_email() {
    let TestSetup { state, session } = test_setup().await;

    let result = login(
        State(state.clone()),
        session,
        Json(LoginRequest {
            email: "nobody@eduportal.com".to_string(),
            password: "whatever-password".to_string(),
        }),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

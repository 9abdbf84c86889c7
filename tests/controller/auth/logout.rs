//! Tests for the logout endpoint.

use axum::{http::StatusCode, response::IntoResponse};
use eduportal::server::{controller::auth::logout, model::session::user::SessionUserId};

use super::*;

/// Tests logout with an active session.
///
/// Expected: 200 OK and the session user removed.
#[tokio::test]
async fn success_clears_session() {
    let TestSetup { session, .. } = test_setup().await;

    SessionUserId::insert(&session, 1).await.unwrap();

    let result = logout(session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let user_id = SessionUserId::get(&session).await.unwrap();
    assert!(user_id.is_none());
}

/// Tests logout without a session user.
///
/// Expected: 200 OK, logout is idempotent.
#[tokio::test]
async fn success_without_session_user() {
    let TestSetup { session, .. } = test_setup().await;

    let result = logout(session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
}

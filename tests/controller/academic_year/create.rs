//! Tests for the create_academic_year endpoint and the single-current-year
//! invariant.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use eduportal::{
    model::academic_year::CreateAcademicYearRequest,
    server::{
        controller::academic_year::create_academic_year,
        data::academic_year::AcademicYearRepository,
    },
};

use super::*;

fn request(year_name: &str, is_current: bool) -> CreateAcademicYearRequest {
    CreateAcademicYearRequest {
        year_name: year_name.to_string(),
        start_date: "2025-09-01".to_string(),
        end_date: "2026-06-30".to_string(),
        semester: "1".to_string(),
        is_current: Some(is_current),
        status: Some("active".to_string()),
    }
}

/// Tests creating an academic year with valid fields.
///
/// Expected: 201 Created.
#[tokio::test]
async fn success_with_valid_fields() {
    let TestSetup { state, .. } = test_setup().await;

    let result = create_academic_year(State(state.clone()), Json(request("2025-2026", true))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
}

/// Tests the current-year exclusivity invariant across two creates.
///
/// Expected: exactly one row flagged current afterwards, the later one.
#[tokio::test]
async fn second_current_year_unsets_first() {
    let TestSetup { state, .. } = test_setup().await;

    create_academic_year(State(state.clone()), Json(request("2024-2025", true)))
        .await
        .unwrap();
    create_academic_year(State(state.clone()), Json(request("2025-2026", true)))
        .await
        .unwrap();

    let repo = AcademicYearRepository::new(&state.db);
    assert_eq!(repo.count_current().await.unwrap(), 1);

    let years = repo.find_all().await.unwrap();
    let current = years.iter().find(|y| y.is_current).unwrap();
    assert_eq!(current.year_name, "2025-2026");
}

/// Tests duplicate year name rejection.
///
/// Expected: 409 Conflict on the second create.
#[tokio::test]
async fn conflict_on_duplicate_year_name() {
    let TestSetup { state, .. } = test_setup().await;

    create_academic_year(State(state.clone()), Json(request("2025-2026", false)))
        .await
        .unwrap();

    let result =
        create_academic_year(State(state.clone()), Json(request("2025-2026", false))).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

/// Tests date-ordering validation.
///
/// Expected: 422 Unprocessable Entity when end_date is not after start_date.
#[tokio::test]
async fn validation_error_on_inverted_dates() {
    let TestSetup { state, .. } = test_setup().await;

    let mut bad_request = request("2025-2026", false);
    bad_request.end_date = "2025-08-31".to_string();

    let result = create_academic_year(State(state.clone()), Json(bad_request)).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

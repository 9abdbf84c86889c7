use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, ValidationErrorDto},
        enrollment::{CreateEnrollmentRequest, EnrollmentDto},
    },
    server::{error::Error, model::app::AppState, service::enrollment::EnrollmentService},
};

pub static ENROLLMENT_TAG: &str = "enrollment";

/// List a course's roster
#[utoipa::path(
    get,
    path = "/api/courses/{id}/enrollments",
    tag = ENROLLMENT_TAG,
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Enrollments for the course", body = ApiResponse<Vec<EnrollmentDto>>),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_enrollments(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let enrollment_service = EnrollmentService::new(&state.db);

    let enrollments = enrollment_service.list_for_course(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(enrollments))))
}

/// Enroll a student in a course
#[utoipa::path(
    post,
    path = "/api/courses/{id}/enrollments",
    tag = ENROLLMENT_TAG,
    params(("id" = i32, Path, description = "Course ID")),
    request_body = CreateEnrollmentRequest,
    responses(
        (status = 201, description = "Student enrolled", body = ApiResponse<EnrollmentDto>),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 409, description = "Student already enrolled", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_enrollment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<CreateEnrollmentRequest>,
) -> Result<impl IntoResponse, Error> {
    let enrollment_service = EnrollmentService::new(&state.db);

    let enrollment = enrollment_service.enroll(id, request).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Student enrolled successfully",
            enrollment,
        )),
    ))
}

/// Drop a student from a course
#[utoipa::path(
    delete,
    path = "/api/courses/{id}/enrollments/{student_id}",
    tag = ENROLLMENT_TAG,
    params(
        ("id" = i32, Path, description = "Course ID"),
        ("student_id" = i32, Path, description = "Student row ID")
    ),
    responses(
        (status = 200, description = "Enrollment removed"),
        (status = 404, description = "Enrollment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_enrollment(
    State(state): State<AppState>,
    Path((id, student_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let enrollment_service = EnrollmentService::new(&state.db);

    enrollment_service.drop(id, student_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::message("Enrollment removed successfully")),
    ))
}
